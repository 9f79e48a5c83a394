use super::super::ROUND_CONSTANTS;

pub fn iota(state: &mut [[u64; 5]; 5], round_number: usize) {
	state[0][0] ^= ROUND_CONSTANTS[round_number];
}
