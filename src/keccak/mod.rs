//! The Keccak-f\[1600\] permutation.
//!
//! Lanes are stored column-major as `state[x][y]`, so lane `l` of the
//! byte-serialized state is `state[l % 5][l / 5]`.

mod rho_offsets;
mod round_constants;

use rho_offsets::RHO_OFFSETS;
use round_constants::ROUND_CONSTANTS;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

pub mod sha3;

pub type KeccakState = [[u64; 5]; 5];

pub const NUM_ROUNDS: usize = 24;

pub fn keccak_f1600(state: &mut KeccakState) {
	for round in 0 .. NUM_ROUNDS {
		theta(state);
		rho(state);
		pi(state);
		chi(state);
		iota(state, round);
	}
}

#[test]
fn permutes_zero_state() {
	// first lanes of KeccakF-1600-IntermediateValues.txt, "after permutation"
	let mut state = [[0; 5]; 5];
	keccak_f1600(&mut state);

	assert_eq!(state[0][0], 0xf1258f7940e1dde7);
	assert_eq!(state[1][0], 0x84d5ccf933c0478a);
}

#[test]
fn permutation_is_not_involutive() {
	let mut once = [[0; 5]; 5];
	keccak_f1600(&mut once);

	let mut twice = once;
	keccak_f1600(&mut twice);

	assert_ne!(once, twice);
	assert_ne!(twice, [[0; 5]; 5]);
}
