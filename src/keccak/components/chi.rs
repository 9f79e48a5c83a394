pub fn chi(state: &mut [[u64; 5]; 5]) {
	for y in 0 .. 5 {
		let mut new_row = [0; 5];

		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			new_row[x] = !state[xp1][y] & state[xp2][y];
		}

		for x in 0 .. 5 {
			state[x][y] ^= new_row[x];
		}
	}
}

#[test]
fn rows_are_mixed_independently() {
	let mut state = [[0; 5]; 5];
	state[2][1] = 0b1010;

	chi(&mut state);

	// lane (0, 1) picks up !lane(1, 1) & lane(2, 1)
	assert_eq!(state[0][1], 0b1010);
	assert_eq!(state[1][1], 0);
	assert_eq!(state[2][1], 0b1010);

	for x in 0 .. 5 {
		assert_eq!(state[x][0], 0);
		assert_eq!(state[x][2], 0);
	}
}
