#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! Streaming SHA3-256 and Keccak-256 over a single Keccak-f\[1600\] sponge.

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

mod error;
mod keccak;

pub use error::Error;

#[doc(inline)]
pub use keccak::sha3;

pub use keccak::sha3::{keccak_256, sha3_256, DigestMode, HashContext, BLOCK_SIZE, DIGEST_SIZE, STATE_SIZE};
