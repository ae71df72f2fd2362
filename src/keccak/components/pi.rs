use super::super::KeccakState;

pub fn pi(state: &mut KeccakState) {
	let old = *state;

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			state[y][(2 * x + 3 * y) % 5] = old[x][y];
		}
	}
}
