use super::super::{KeccakState, ROUND_CONSTANTS};

pub fn iota(state: &mut KeccakState, round_number: usize) {
	state[0][0] ^= ROUND_CONSTANTS[round_number];
}
