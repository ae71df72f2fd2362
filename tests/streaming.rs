//! Property tests for the incremental interface.

use std::io::Write;

use krypton_sha3::{keccak_256, sha3_256, DigestMode, HashContext, DIGEST_SIZE};
use proptest::prelude::*;

const MODES: [DigestMode; 2] = [DigestMode::Standard, DigestMode::LegacyKeccak];

fn one_shot(mode: DigestMode, bytes: &[u8]) -> [u8; DIGEST_SIZE] {
	match mode {
		DigestMode::Standard => sha3_256(bytes),
		DigestMode::LegacyKeccak => keccak_256(bytes),
	}
}

/// Splits `bytes` at the given cut points, which may be out of order or out of range.
fn split_at_cuts<'a>(bytes: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
	let mut cuts: Vec<usize> = cuts.iter().map(|&cut| cut % (bytes.len() + 1)).collect();
	cuts.sort_unstable();

	let mut chunks = Vec::with_capacity(cuts.len() + 1);
	let mut start = 0;

	for cut in cuts {
		chunks.push(&bytes[start .. cut]);
		start = cut;
	}

	chunks.push(&bytes[start ..]);
	chunks
}

proptest! {
	/// Any chunking of the input yields the same digest as a single absorb.
	#[test]
	fn chunked_absorb_matches_one_shot(
		bytes in prop::collection::vec(any::<u8>(), 0 .. 700),
		cuts in prop::collection::vec(any::<usize>(), 0 .. 12),
	) {
		let mut ctx = HashContext::new();

		for chunk in split_at_cuts(&bytes, &cuts) {
			ctx.absorb(chunk);
		}

		for mode in MODES {
			prop_assert_eq!(ctx.digest(mode), one_shot(mode, &bytes));
		}
	}

	/// Digests taken midway do not disturb later ones.
	#[test]
	fn digest_is_non_destructive(
		head in prop::collection::vec(any::<u8>(), 0 .. 400),
		tail in prop::collection::vec(any::<u8>(), 0 .. 400),
	) {
		let mut ctx = HashContext::with_data(&head);

		let first = ctx.digest(DigestMode::Standard);
		prop_assert_eq!(first, ctx.digest(DigestMode::Standard));
		prop_assert_eq!(first, sha3_256(&head));
		let _ = ctx.digest(DigestMode::LegacyKeccak);

		ctx.absorb(&tail);

		let whole = [head.as_slice(), tail.as_slice()].concat();
		for mode in MODES {
			prop_assert_eq!(ctx.digest(mode), one_shot(mode, &whole));
		}
	}

	/// The two padding modes never agree on the same input.
	#[test]
	fn modes_diverge(bytes in prop::collection::vec(any::<u8>(), 0 .. 300)) {
		let ctx = HashContext::with_data(&bytes);
		prop_assert_ne!(ctx.digest(DigestMode::Standard), ctx.digest(DigestMode::LegacyKeccak));
	}

	/// Streaming through `io::Write` matches direct absorption.
	#[test]
	fn io_copy_matches_absorb(bytes in prop::collection::vec(any::<u8>(), 0 .. 2000)) {
		let mut ctx = HashContext::new();
		std::io::copy(&mut bytes.as_slice(), &mut ctx).unwrap();
		ctx.flush().unwrap();

		prop_assert_eq!(ctx.digest(DigestMode::Standard), sha3_256(&bytes));
	}

	/// A wiped context starts over from nothing.
	#[test]
	fn wipe_resets(
		discarded in prop::collection::vec(any::<u8>(), 1 .. 300),
		kept in prop::collection::vec(any::<u8>(), 0 .. 300),
	) {
		let mut ctx = HashContext::with_data(&discarded);
		ctx.wipe();
		ctx.wipe();
		ctx.absorb(&kept);

		prop_assert_eq!(ctx.digest(DigestMode::LegacyKeccak), keccak_256(&kept));
	}
}

#[test]
fn constructor_data_is_absorbed() {
	let mut from_constructor = HashContext::with_data(b"prefix-");
	from_constructor.update(b"suffix");

	let mut from_updates = HashContext::default();
	from_updates.update(b"prefix-");
	from_updates.update(b"suffix");

	assert_eq!(
		from_constructor.digest(DigestMode::Standard),
		from_updates.digest(DigestMode::Standard),
	);
}

#[test]
fn reported_sizes() {
	assert_eq!(HashContext::BLOCK_SIZE, 136);
	assert_eq!(HashContext::DIGEST_SIZE, 32);
	assert_eq!(krypton_sha3::STATE_SIZE, 200);
}

#[test]
fn contexts_are_independent_across_threads() {
	let handles: Vec<_> = (0 .. 4u8)
		.map(|seed| {
			std::thread::spawn(move || {
				let bytes = vec![seed; 1000 + seed as usize];
				let mut ctx = HashContext::new();

				for chunk in bytes.chunks(17) {
					ctx.absorb(chunk);
				}

				(bytes, ctx.digest(DigestMode::Standard))
			})
		})
		.collect();

	for handle in handles {
		let (bytes, digest) = handle.join().unwrap();
		assert_eq!(digest, sha3_256(&bytes));
	}
}
