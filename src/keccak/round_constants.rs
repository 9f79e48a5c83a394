const fn step_lfsr(state: u8) -> (u8, bool) {
	let new_bit = ((state & 0x8e).count_ones() & 1) as u8;
	let lfsr_output = state & 0x80 != 0;
	let new_state = (state << 1) | new_bit;

	(new_state, lfsr_output)
}

const fn compute_round_constants() -> [u64; 24] {
	let mut lfsr = 0x80;
	let mut out = [0; 24];

	let mut i = 0;

	while i < 24 {
		let mut j = 0;

		while j < 7 {
			let place = (1 << j) - 1;

			let (new_lfsr, lfsr_out) = step_lfsr(lfsr);
			lfsr = new_lfsr;

			if lfsr_out {
				out[i] |= 1 << place;
			}

			j += 1;
		}

		i += 1;
	}

	out
}

// walks the 24 lanes other than (0, 0) along the pi trail starting from (1, 0);
// the t-th lane visited is rotated by the t-th triangular number
const fn compute_rho_offsets() -> [[u32; 5]; 5] {
	let mut out = [[0; 5]; 5];

	let mut x = 1;
	let mut y = 0;

	let mut t = 0;

	while t < 24 {
		out[x][y] = ((t + 1) * (t + 2) / 2 % 64) as u32;

		let new_x = y;
		let new_y = (2 * x + 3 * y) % 5;

		x = new_x;
		y = new_y;

		t += 1;
	}

	out
}

/// The value XORed into lane `(0, 0)` by iota, one per round.
pub const ROUND_CONSTANTS: [u64; 24] = compute_round_constants();

/// Rotation applied to each lane by rho, indexed `[x][y]` like the state.
pub const RHO_OFFSETS: [[u32; 5]; 5] = compute_rho_offsets();

#[test]
fn round_constants_match_published_table() {
	assert_eq!(ROUND_CONSTANTS, [
		0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
		0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
		0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
		0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
		0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
		0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
	]);
}

#[test]
fn rho_offsets_match_published_table() {
	assert_eq!(RHO_OFFSETS, [
		[0, 36, 3, 41, 18],
		[1, 44, 10, 45, 2],
		[62, 6, 43, 15, 61],
		[28, 55, 25, 21, 56],
		[27, 20, 39, 8, 14],
	]);
}
