/// Iota round constants for the 24 rounds of Keccak-f\[1600\].
pub const ROUND_CONSTANTS: [u64; 24] = [
	0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
	0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
	0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
	0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
	0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
	0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

#[cfg(test)]
fn lfsr_round_constants() -> [u64; 24] {
	// rc(t) from FIPS 202 section 3.2.5, one bit per step of x^8 + x^6 + x^5 + x^4 + 1
	let mut lfsr: u8 = 1;
	let mut out = [0; 24];

	for constant in out.iter_mut() {
		for j in 0 .. 7 {
			if lfsr & 1 != 0 {
				*constant |= 1 << ((1 << j) - 1);
			}

			lfsr = if lfsr & 0x80 != 0 {(lfsr << 1) ^ 0x71} else {lfsr << 1};
		}
	}

	out
}

#[test]
fn table_matches_lfsr() {
	assert_eq!(ROUND_CONSTANTS, lfsr_round_constants());
}
