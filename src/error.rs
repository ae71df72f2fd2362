use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
	#[error("digest output must be {expected} bytes, got {actual}")]
	OutputLength {
		expected: usize,
		actual: usize,
	},

	#[error("unknown digest mode, expected one of sha3, sha3-256, keccak, keccak-256")]
	UnknownMode,
}
