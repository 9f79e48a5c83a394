pub fn pi(state: &mut [[u64; 5]; 5]) {
	let mut new_state = [[0; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			let new_x = y;
			let new_y = (2 * x + 3 * y) % 5;

			new_state[new_x][new_y] = state[x][y];
		}
	}

	*state = new_state;
}

#[test]
fn moves_lanes_along_the_trail() {
	let mut state = [[0; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			state[x][y] = (10 * x + y) as u64;
		}
	}

	pi(&mut state);

	// (0, 0) is fixed, (1, 0) moves to (0, 2), (0, 1) moves to (1, 3)
	assert_eq!(state[0][0], 0);
	assert_eq!(state[0][2], 10);
	assert_eq!(state[1][3], 1);
	assert_eq!(state[3][3], 23);
}
