use super::super::rotl64;

pub fn theta(state: &mut [[u64; 5]; 5]) {
	let mut parities = [0; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			parities[x] ^= state[x][y];
		}
	}

	// parities are complete before any lane changes, so the update below can run in place
	for x in 0 .. 5 {
		let xm1 = (x + 4) % 5;
		let xp1 = (x + 1) % 5;

		let crossed_parities = parities[xm1] ^ rotl64(parities[xp1], 1);

		for y in 0 .. 5 {
			state[x][y] ^= crossed_parities;
		}
	}
}

#[test]
fn single_bit_spreads_to_neighbouring_columns() {
	let mut state = [[0; 5]; 5];
	state[2][3] = 1;

	theta(&mut state);

	for y in 0 .. 5 {
		// column 3 sees column 2 unrotated, column 1 sees it rotated by one
		assert_eq!(state[3][y], 1);
		assert_eq!(state[1][y], 2);
		assert_eq!(state[0][y], 0);
		assert_eq!(state[4][y], 0);
	}

	assert_eq!(state[2][3], 1);
	assert_eq!(state[2][0], 0);
}
