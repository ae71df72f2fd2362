use super::super::KeccakState;

pub fn chi(state: &mut KeccakState) {
	for y in 0 .. 5 {
		let row: [u64; 5] = core::array::from_fn(|x| state[x][y]);

		for x in 0 .. 5 {
			state[x][y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
		}
	}
}
