//! Prints SHA3-256 or Keccak-256 digests of files, or of standard input.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use krypton_sha3::{DigestMode, HashContext, DIGEST_SIZE};

const READ_CHUNK: usize = 8 * 1024;

/// Compute SHA3-256 (FIPS 202) or legacy Keccak-256 digests
#[derive(Parser)]
#[command(name = "krypton-sha3sum")]
#[command(version, about, long_about = None)]
struct Cli {
	/// Digest mode: sha3, sha3-256, keccak or keccak-256
	#[arg(short, long, env = "KRYPTON_SHA3_MODE", default_value_t = DigestMode::Standard)]
	mode: DigestMode,

	/// Shorthand for `--mode keccak`
	#[arg(short, long, conflicts_with = "mode")]
	keccak: bool,

	/// Files to hash; `-` or nothing reads standard input
	files: Vec<PathBuf>,
}

impl Cli {
	fn digest_mode(&self) -> DigestMode {
		if self.keccak {
			DigestMode::from_keccak_flag(true)
		} else {
			self.mode
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
		.with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
		.init();

	let mode = cli.digest_mode();
	debug!(%mode, files = cli.files.len(), "hashing");

	let inputs = if cli.files.is_empty() {
		vec![PathBuf::from("-")]
	} else {
		cli.files
	};

	let mut failed = false;

	for path in &inputs {
		match hash_path(path, mode) {
			Ok(digest) => println!("{}  {}", to_hex(&digest), path.display()),
			Err(err) => {
				eprintln!("krypton-sha3sum: {:#}", err);
				failed = true;
			}
		}
	}

	if failed {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}

fn hash_path(path: &Path, mode: DigestMode) -> Result<[u8; DIGEST_SIZE]> {
	if path.as_os_str() == "-" {
		return hash_reader(io::stdin().lock(), mode).context("reading standard input");
	}

	let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
	hash_reader(file, mode).with_context(|| format!("reading {}", path.display()))
}

fn hash_reader(mut reader: impl Read, mode: DigestMode) -> Result<[u8; DIGEST_SIZE]> {
	let mut ctx = HashContext::new();
	let mut buf = [0; READ_CHUNK];

	loop {
		let read = match reader.read(&mut buf) {
			Ok(0) => break,
			Ok(read) => read,
			Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
			Err(err) => return Err(err.into()),
		};

		ctx.absorb(&buf[.. read]);
	}

	Ok(ctx.digest(mode))
}

fn to_hex(bytes: &[u8]) -> String {
	use std::fmt::Write;

	let mut out = String::with_capacity(bytes.len() * 2);

	for &byte in bytes {
		let _ = write!(out, "{:>02x}", byte);
	}

	out
}

#[test]
fn hashes_reader_in_chunks() {
	let data = vec![b'a'; 3 * READ_CHUNK + 11];

	assert_eq!(
		hash_reader(data.as_slice(), DigestMode::Standard).unwrap(),
		krypton_sha3::sha3_256(&data),
	);
}

#[test]
fn keccak_flag_selects_legacy_mode() {
	let cli = Cli::parse_from(["krypton-sha3sum", "--keccak", "a.bin"]);
	assert_eq!(cli.digest_mode(), DigestMode::LegacyKeccak);

	let cli = Cli::parse_from(["krypton-sha3sum", "--mode", "sha3-256"]);
	assert_eq!(cli.digest_mode(), DigestMode::Standard);
	assert!(cli.files.is_empty());
}

#[test]
fn formats_lowercase_hex() {
	assert_eq!(to_hex(&[0x00, 0xab, 0x0f]), "00ab0f");
}
