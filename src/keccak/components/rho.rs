use super::super::{rotl64, RHO_OFFSETS};

pub fn rho(state: &mut [[u64; 5]; 5]) {
	for x in 0 .. 5 {
		for y in 0 .. 5 {
			state[x][y] = rotl64(state[x][y], RHO_OFFSETS[x][y]);
		}
	}
}

#[test]
fn rotates_each_lane_by_its_offset() {
	let mut state = [[1; 5]; 5];

	rho(&mut state);

	assert_eq!(state[0][0], 1);
	assert_eq!(state[1][0], 1u64 << 1);
	assert_eq!(state[0][1], 1u64 << 36);
	assert_eq!(state[2][2], 1u64 << 43);
	assert_eq!(state[4][4], 1u64 << 14);
}
