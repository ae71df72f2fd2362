use super::super::KeccakState;

pub fn theta(state: &mut KeccakState) {
	let parities: [u64; 5] = core::array::from_fn(|x| {
		state[x].iter().fold(0, |parity, lane| parity ^ lane)
	});

	for (x, column) in state.iter_mut().enumerate() {
		let crossed_parities = parities[(x + 4) % 5] ^ parities[(x + 1) % 5].rotate_left(1);

		for lane in column.iter_mut() {
			*lane ^= crossed_parities;
		}
	}
}
