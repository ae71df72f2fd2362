//! Incremental [SHA-3](https://en.wikipedia.org/wiki/SHA-3) hashing with a
//! 256-bit output.
//!
//! One [`HashContext`] can finish either as FIPS 202 SHA3-256 or as the
//! original Keccak-256 submission (the variant Ethereum uses); the two only
//! differ in the domain byte that starts the padding.
//!
//! ```
//! use krypton_sha3::{DigestMode, HashContext};
//!
//! let mut ctx = HashContext::new();
//! ctx.absorb(b"ab");
//! ctx.absorb(b"c");
//!
//! let sha3 = ctx.digest(DigestMode::Standard);
//! let keccak = ctx.digest(DigestMode::LegacyKeccak);
//!
//! assert_eq!(sha3, krypton_sha3::sha3_256(b"abc"));
//! assert_eq!(keccak, krypton_sha3::keccak_256(b"abc"));
//! ```

use core::fmt;
use core::str::FromStr;

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{keccak_f1600, KeccakState};
use crate::Error;

/// Number of bytes absorbed per permutation (the sponge rate).
pub const BLOCK_SIZE: usize = 136;

/// Length of a digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Size of the permutation state in bytes.
pub const STATE_SIZE: usize = 200;

const _: () = assert!(STATE_SIZE == 25 * 8);
const _: () = assert!(STATE_SIZE - BLOCK_SIZE == 2 * DIGEST_SIZE);

/// Selects how a [`HashContext`] is padded when a digest is taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigestMode {
	/// FIPS 202 SHA3-256.
	#[default]
	Standard,
	/// Keccak-256 as submitted to the SHA-3 competition.
	LegacyKeccak,
}

impl DigestMode {
	/// Maps the `keccak: bool` flag used by scripting bindings onto a mode.
	pub fn from_keccak_flag(keccak: bool) -> Self {
		if keccak {
			Self::LegacyKeccak
		} else {
			Self::Standard
		}
	}

	/// The first padding byte, which also carries the domain separation bits.
	pub const fn domain_byte(self) -> u8 {
		match self {
			Self::Standard => 0x06,
			Self::LegacyKeccak => 0x01,
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			Self::Standard => "sha3-256",
			Self::LegacyKeccak => "keccak-256",
		}
	}
}

impl fmt::Display for DigestMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for DigestMode {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		const NAMES: [(&str, DigestMode); 4] = [
			("sha3", DigestMode::Standard),
			("sha3-256", DigestMode::Standard),
			("keccak", DigestMode::LegacyKeccak),
			("keccak-256", DigestMode::LegacyKeccak),
		];

		NAMES
			.iter()
			.find(|(name, _)| name.eq_ignore_ascii_case(s))
			.map(|&(_, mode)| mode)
			.ok_or(Error::UnknownMode)
	}
}

/// A running SHA3-256 / Keccak-256 computation.
///
/// Taking a digest never finalizes the context itself: [`digest`](Self::digest)
/// pads and permutes a private copy, so absorbing may continue afterwards and
/// later digests cover everything absorbed so far.
///
/// The state is overwritten with zeroes by [`wipe`](Self::wipe) and again
/// whenever the context is dropped, including the temporary copies made while
/// digesting.
#[derive(Clone)]
pub struct HashContext {
	state: KeccakState,
	// offset of the next byte within the current block, always < BLOCK_SIZE
	cursor: usize,
}

impl HashContext {
	pub const BLOCK_SIZE: usize = BLOCK_SIZE;
	pub const DIGEST_SIZE: usize = DIGEST_SIZE;

	pub fn new() -> Self {
		trace!("sha3 context created");

		Self {
			state: [[0; 5]; 5],
			cursor: 0,
		}
	}

	/// Creates a context that has already absorbed `bytes`.
	pub fn with_data(bytes: &[u8]) -> Self {
		let mut ctx = Self::new();
		ctx.absorb(bytes);
		ctx
	}

	/// XORs `bytes` into the state, permuting after every full block.
	///
	/// Splitting the input across any number of calls gives the same result
	/// as absorbing it all at once.
	pub fn absorb(&mut self, mut bytes: &[u8]) {
		while !bytes.is_empty() {
			let take = (BLOCK_SIZE - self.cursor).min(bytes.len());
			let (block, rest) = bytes.split_at(take);

			for (offset, &byte) in block.iter().enumerate() {
				xor_byte(&mut self.state, self.cursor + offset, byte);
			}

			self.cursor += take;
			bytes = rest;

			if self.cursor == BLOCK_SIZE {
				keccak_f1600(&mut self.state);
				self.cursor = 0;
			}
		}

		debug_assert!(self.cursor < BLOCK_SIZE);
	}

	/// Same as [`absorb`](Self::absorb).
	pub fn update(&mut self, bytes: &[u8]) {
		self.absorb(bytes);
	}

	/// Returns the digest of everything absorbed so far.
	pub fn digest(&self, mode: DigestMode) -> [u8; DIGEST_SIZE] {
		trace!(%mode, "sha3 digest requested");

		// the copy is wiped when it goes out of scope
		let mut finished = self.clone();
		finished.pad(mode);
		keccak_f1600(&mut finished.state);
		finished.squeeze()
	}

	/// Writes the digest into `out`, which must be exactly [`DIGEST_SIZE`] bytes.
	pub fn digest_into(&self, mode: DigestMode, out: &mut [u8]) -> Result<(), Error> {
		if out.len() != DIGEST_SIZE {
			return Err(Error::OutputLength {
				expected: DIGEST_SIZE,
				actual: out.len(),
			});
		}

		let mut digest = self.digest(mode);
		out.copy_from_slice(&digest);
		digest.zeroize();

		Ok(())
	}

	/// Overwrites the state with zeroes, leaving a context equivalent to
	/// [`HashContext::new`]. Safe to call any number of times.
	pub fn wipe(&mut self) {
		self.zeroize();
		trace!("sha3 context wiped");
	}

	fn pad(&mut self, mode: DigestMode) {
		// when cursor is BLOCK_SIZE - 1 both bytes land in the same place
		xor_byte(&mut self.state, self.cursor, mode.domain_byte());
		xor_byte(&mut self.state, BLOCK_SIZE - 1, 0x80);
	}

	fn squeeze(&self) -> [u8; DIGEST_SIZE] {
		let mut out = [0; DIGEST_SIZE];

		for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
			chunk.copy_from_slice(&self.state[i % 5][i / 5].to_le_bytes());
		}

		out
	}

	#[cfg(test)]
	fn state_bytes(&self) -> [u8; STATE_SIZE] {
		let mut out = [0; STATE_SIZE];

		for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
			chunk.copy_from_slice(&self.state[i % 5][i / 5].to_le_bytes());
		}

		out
	}
}

fn xor_byte(state: &mut KeccakState, position: usize, byte: u8) {
	let lane = position / 8;
	state[lane % 5][lane / 5] ^= u64::from(byte) << (8 * (position % 8));
}

impl Default for HashContext {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for HashContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HashContext").finish_non_exhaustive()
	}
}

impl Zeroize for HashContext {
	fn zeroize(&mut self) {
		self.state.zeroize();
		self.cursor.zeroize();
	}
}

impl Drop for HashContext {
	fn drop(&mut self) {
		self.zeroize();
	}
}

impl ZeroizeOnDrop for HashContext {}

#[cfg(feature = "std")]
impl std::io::Write for HashContext {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.absorb(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sha3_256(bytes: &[u8]) -> [u8; DIGEST_SIZE] {
	HashContext::with_data(bytes).digest(DigestMode::Standard)
}

/// Returns the Keccak-256 digest of the byte slice passed to it.
pub fn keccak_256(bytes: &[u8]) -> [u8; DIGEST_SIZE] {
	HashContext::with_data(bytes).digest(DigestMode::LegacyKeccak)
}

#[cfg(test)]
fn format_hash(hash: &[u8]) -> String {
	use std::fmt::Write;

	let mut out = String::new();

	for &byte in hash {
		write!(out, "{:>02x}", byte).unwrap();
	}

	out
}

#[test]
fn test_empty_inputs() {
	assert_eq!(
		format_hash(&sha3_256(b"")),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);

	assert_eq!(
		format_hash(&keccak_256(b"")),
		"c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
	);
}

#[test]
fn test_short_inputs() {
	assert_eq!(
		format_hash(&sha3_256(b"abc")),
		"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
	);

	assert_eq!(
		format_hash(&keccak_256(b"abc")),
		"4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45",
	);

	assert_eq!(
		format_hash(&sha3_256(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq")),
		"41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376",
	);

	assert_eq!(
		format_hash(&sha3_256(b"The quick brown fox jumps over the lazy dog")),
		"69070dda01975c8c120c3aada1b282394e7f032fa9cf32f4cb2259a0897dfc04",
	);

	assert_eq!(
		format_hash(&keccak_256(b"The quick brown fox jumps over the lazy dog")),
		"4d741b6f1eb29cb2a9b9911c82f56fa8d73b04959d3d9d222895df6c0b28aa15",
	);
}

#[test]
fn test_million_a() {
	let chunk = [b'a'; 1000];
	let mut ctx = HashContext::new();

	for _ in 0 .. 1000 {
		ctx.absorb(&chunk);
	}

	assert_eq!(
		format_hash(&ctx.digest(DigestMode::Standard)),
		"5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1",
	);
}

#[test]
fn new_context_is_zeroed() {
	let ctx = HashContext::new();

	assert_eq!(ctx.state_bytes(), [0; STATE_SIZE]);
	assert_eq!(ctx.cursor, 0);
}

#[test]
fn absorb_buffers_partial_blocks() {
	let mut ctx = HashContext::new();
	ctx.absorb(&[0xff; 10]);

	assert_eq!(ctx.cursor, 10);
	assert_eq!(&ctx.state_bytes()[.. 10], &[0xff; 10]);
	assert_eq!(&ctx.state_bytes()[10 ..], &[0; STATE_SIZE - 10][..]);

	ctx.absorb(&[0xff; BLOCK_SIZE - 10]);
	assert_eq!(ctx.cursor, 0);
	assert_ne!(&ctx.state_bytes()[BLOCK_SIZE ..], &[0; STATE_SIZE - BLOCK_SIZE][..]);
}

#[test]
fn empty_absorb_is_noop() {
	let mut ctx = HashContext::with_data(b"partial");
	let before = ctx.state_bytes();

	ctx.absorb(b"");

	assert_eq!(ctx.state_bytes(), before);
	assert_eq!(ctx.cursor, 7);
}

#[test]
fn digest_leaves_context_untouched() {
	let ctx = HashContext::with_data(b"some input");
	let before = ctx.state_bytes();

	let first = ctx.digest(DigestMode::Standard);
	let second = ctx.digest(DigestMode::Standard);

	assert_eq!(first, second);
	assert_eq!(ctx.state_bytes(), before);
	assert_eq!(ctx.cursor, 10);
}

#[test]
fn digest_then_continue_absorbing() {
	let mut ctx = HashContext::with_data(b"hello ");
	assert_eq!(ctx.digest(DigestMode::Standard), sha3_256(b"hello "));

	ctx.absorb(b"world");
	assert_eq!(ctx.digest(DigestMode::Standard), sha3_256(b"hello world"));
	assert_eq!(ctx.digest(DigestMode::LegacyKeccak), keccak_256(b"hello world"));
}

#[test]
fn padding_modes_diverge() {
	let ctx = HashContext::with_data(b"same input");

	assert_ne!(ctx.digest(DigestMode::Standard), ctx.digest(DigestMode::LegacyKeccak));
}

#[test]
fn wipe_zeroes_state() {
	let mut ctx = HashContext::with_data(&[0x5a; 300]);
	assert_ne!(ctx.state_bytes(), [0; STATE_SIZE]);

	ctx.wipe();
	assert_eq!(ctx.state_bytes(), [0; STATE_SIZE]);
	assert_eq!(ctx.cursor, 0);

	ctx.wipe();
	assert_eq!(ctx.state_bytes(), [0; STATE_SIZE]);
	assert_eq!(ctx.cursor, 0);
}

#[test]
fn wiped_context_behaves_like_new() {
	let mut ctx = HashContext::with_data(b"discarded");
	ctx.wipe();
	ctx.absorb(b"abc");

	assert_eq!(ctx.digest(DigestMode::Standard), sha3_256(b"abc"));
}

#[test]
fn drop_wipes_state() {
	use core::mem::ManuallyDrop;

	let mut ctx = ManuallyDrop::new(HashContext::with_data(&[0xa5; 150]));
	assert_ne!(ctx.state_bytes(), [0; STATE_SIZE]);

	// SAFETY: the fields are plain integers and stay initialized after drop
	unsafe { ManuallyDrop::drop(&mut ctx) };

	assert_eq!(ctx.state_bytes(), [0; STATE_SIZE]);
	assert_eq!(ctx.cursor, 0);
}

#[test]
fn digest_into_checks_length() {
	let ctx = HashContext::with_data(b"abc");

	let mut short = [0; 31];
	assert_eq!(
		ctx.digest_into(DigestMode::Standard, &mut short),
		Err(Error::OutputLength {expected: 32, actual: 31}),
	);

	let mut out = [0; 32];
	ctx.digest_into(DigestMode::LegacyKeccak, &mut out).unwrap();
	assert_eq!(out, keccak_256(b"abc"));
}

#[test]
fn mode_names() {
	assert_eq!("SHA3-256".parse(), Ok(DigestMode::Standard));
	assert_eq!("sha3".parse(), Ok(DigestMode::Standard));
	assert_eq!("Keccak".parse(), Ok(DigestMode::LegacyKeccak));
	assert_eq!("keccak-256".parse(), Ok(DigestMode::LegacyKeccak));
	assert_eq!("sha256".parse::<DigestMode>(), Err(Error::UnknownMode));

	assert_eq!(DigestMode::LegacyKeccak.to_string(), "keccak-256");
	assert_eq!(DigestMode::from_keccak_flag(true), DigestMode::LegacyKeccak);
	assert_eq!(DigestMode::from_keccak_flag(false), DigestMode::Standard);
	assert_eq!(DigestMode::default(), DigestMode::Standard);
}

#[test]
fn debug_hides_state() {
	let ctx = HashContext::with_data(b"secret");

	assert_eq!(format!("{:?}", ctx), "HashContext { .. }");
}
