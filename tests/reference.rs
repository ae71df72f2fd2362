//! Cross-checks against the RustCrypto `sha3` crate.

use krypton_sha3::{keccak_256, sha3_256, DigestMode, HashContext, BLOCK_SIZE};
use sha3::{Digest, Keccak256, Sha3_256};
use test_case::test_case;

fn pattern(len: usize) -> Vec<u8> {
	(0 .. len).map(|i| (i * 7 + 3) as u8).collect()
}

#[test_case(0 ; "empty")]
#[test_case(1 ; "single byte")]
#[test_case(BLOCK_SIZE - 2 ; "two short of a block")]
#[test_case(BLOCK_SIZE - 1 ; "one short of a block")]
#[test_case(BLOCK_SIZE ; "exactly one block")]
#[test_case(BLOCK_SIZE + 1 ; "one past a block")]
#[test_case(2 * BLOCK_SIZE - 1 ; "one short of two blocks")]
#[test_case(2 * BLOCK_SIZE ; "exactly two blocks")]
#[test_case(2 * BLOCK_SIZE + 1 ; "one past two blocks")]
#[test_case(1000 ; "several blocks")]
fn matches_reference_at_length(len: usize) {
	let data = pattern(len);

	assert_eq!(&sha3_256(&data)[..], Sha3_256::digest(&data).as_slice());
	assert_eq!(&keccak_256(&data)[..], Keccak256::digest(&data).as_slice());
}

#[test_case(1 ; "byte at a time")]
#[test_case(8 ; "lane at a time")]
#[test_case(135 ; "just under the rate")]
#[test_case(136 ; "rate")]
#[test_case(137 ; "just over the rate")]
fn chunked_matches_reference(chunk_len: usize) {
	let data = pattern(3 * BLOCK_SIZE + 5);
	let mut ctx = HashContext::new();

	for chunk in data.chunks(chunk_len) {
		ctx.absorb(chunk);
	}

	assert_eq!(&ctx.digest(DigestMode::Standard)[..], Sha3_256::digest(&data).as_slice());
	assert_eq!(&ctx.digest(DigestMode::LegacyKeccak)[..], Keccak256::digest(&data).as_slice());
}

#[test]
fn multi_megabyte_input() {
	let data = pattern(3 * 1024 * 1024 + 17);
	let mut ctx = HashContext::new();
	let mut reference = Sha3_256::new();

	for chunk in data.chunks(65_521) {
		ctx.absorb(chunk);
		reference.update(chunk);
	}

	let digest = ctx.digest(DigestMode::Standard);
	assert_eq!(digest.len(), 32);
	assert_eq!(&digest[..], reference.finalize().as_slice());
}

#[test]
fn known_vectors_as_hex() {
	assert_eq!(
		hex::encode(sha3_256(b"")),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);

	assert_eq!(
		hex::encode(keccak_256(b"")),
		"c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
	);
}
