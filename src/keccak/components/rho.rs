use super::super::{KeccakState, RHO_OFFSETS};

pub fn rho(state: &mut KeccakState) {
	for (column, offsets) in state.iter_mut().zip(RHO_OFFSETS.iter()) {
		for (lane, &offset) in column.iter_mut().zip(offsets.iter()) {
			*lane = lane.rotate_left(offset);
		}
	}
}
