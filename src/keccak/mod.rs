//! The Keccak-f[1600] permutation.

mod round_constants;

pub mod sha3;
pub mod sponge;
pub mod state;

pub use round_constants::{RHO_OFFSETS, ROUND_CONSTANTS};
pub use state::{rotl64, State, STATE_BYTES};

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

/// Number of rounds in Keccak-f[1600].
pub const NUM_ROUNDS: usize = 24;

/// Applies one round (theta, rho, pi, chi, iota) with the constant for `round_index`.
///
/// # Panics
///
/// Panics if `round_index` is not below [`NUM_ROUNDS`].
pub fn round(state: &mut State, round_index: usize) {
	let lanes = &mut state.lanes;

	theta(lanes);
	rho(lanes);
	pi(lanes);
	chi(lanes);
	iota(lanes, round_index);
}

/// Applies the full 24-round Keccak-f[1600] permutation in place.
pub fn keccak_f1600(state: &mut State) {
	for round_index in 0 .. NUM_ROUNDS {
		round(state, round_index);
	}
}

// From https://github.com/XKCP/XKCP/blob/master/tests/TestVectors/KeccakF-1600-IntermediateValues.txt,
// lanes listed in byte order, i.e. (0, 0), (1, 0), ..., (4, 4)
#[cfg(test)]
const ZERO_STATE_ONCE: [u64; 25] = [
	0xF1258F7940E1DDE7, 0x84D5CCF933C0478A, 0xD598261EA65AA9EE, 0xBD1547306F80494D,
	0x8B284E056253D057, 0xFF97A42D7F8E6FD4, 0x90FEE5A0A44647C4, 0x8C5BDA0CD6192E76,
	0xAD30A6F71B19059C, 0x30935AB7D08FFC64, 0xEB5AA93F2317D635, 0xA9A6E6260D712103,
	0x81A57C16DBCF555F, 0x43B831CD0347C826, 0x01F22F1A11A5569F, 0x05E5635A21D9AE61,
	0x64BEFEF28CC970F2, 0x613670957BC46611, 0xB87C5A554FD00ECB, 0x8C3EE88A1CCF32C8,
	0x940C7922AE3A2614, 0x1841F924A2C509E4, 0x16F53526E70465C2, 0x75F644E97F30A13B,
	0xEAF1FF7B5CECA249,
];

#[cfg(test)]
const ZERO_STATE_TWICE: [u64; 25] = [
	0x2D5C954DF96ECB3C, 0x6A332CD07057B56D, 0x093D8D1270D76B6C, 0x8A20D9B25569D094,
	0x4F9C4F99E5E7F156, 0xF957B9A2DA65FB38, 0x85773DAE1275AF0D, 0xFAF4F247C3D810F7,
	0x1F1B9EE6F79A8759, 0xE4FECC0FEE98B425, 0x68CE61B6B9CE68A1, 0xDEEA66C4BA8F974F,
	0x33C43D836EAFB1F5, 0xE00654042719DBD9, 0x7CF8A9F009831265, 0xFD5449A6BF174743,
	0x97DDAD33D8994B40, 0x48EAD5FC5D0BE774, 0xE3B8C8EE55B7B03C, 0x91A0226E649E42E9,
	0x900E3129E7BADD7B, 0x202A9EC5FAA3CCE8, 0x5B3402464E1C3DB6, 0x609F4E62A44C1059,
	0x20D06CD26A8FBF5C,
];

#[cfg(test)]
fn assert_lanes(state: &State, expected: &[u64; 25]) {
	for (i, &lane) in expected.iter().enumerate() {
		assert_eq!(state.lane(i % 5, i / 5), lane, "lane ({}, {})", i % 5, i / 5);
	}
}

#[test]
fn zero_state_known_answers() {
	let mut state = State::new();

	keccak_f1600(&mut state);
	assert_lanes(&state, &ZERO_STATE_ONCE);

	keccak_f1600(&mut state);
	assert_lanes(&state, &ZERO_STATE_TWICE);
}

#[test]
fn permutation_is_deterministic() {
	let mut first = State::new();
	let mut second = State::new();

	for _ in 0 .. 2 {
		keccak_f1600(&mut first);
		keccak_f1600(&mut second);
	}

	assert_eq!(first, second);
	assert_ne!(first, State::new());
}

// One round over a flat 25-lane array, index x + 5 * y, with the rotation
// offsets written out in that order.
#[cfg(test)]
fn flat_reference_round(a: &mut [u64; 25], round_constant: u64) {
	const FLAT_RHO: [u32; 25] = [
		0, 1, 62, 28, 27,
		36, 44, 6, 55, 20,
		3, 10, 43, 25, 39,
		41, 45, 15, 21, 8,
		18, 2, 61, 56, 14,
	];

	let mut c = [0u64; 5];

	for x in 0 .. 5 {
		c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
	}

	for x in 0 .. 5 {
		let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);

		for y in 0 .. 5 {
			a[x + 5 * y] ^= d;
		}
	}

	let mut b = [0u64; 25];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			b[y + 5 * ((2 * x + 3 * y) % 5)] = a[x + 5 * y].rotate_left(FLAT_RHO[x + 5 * y]);
		}
	}

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			a[x + 5 * y] = b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
		}
	}

	a[0] ^= round_constant;
}

#[test]
fn grid_round_matches_flat_reference() {
	let mut bytes = [0; STATE_BYTES];

	for (i, byte) in bytes.iter_mut().enumerate() {
		*byte = (i as u8).wrapping_mul(151).wrapping_add(7);
	}

	let mut state = State::from_bytes(&bytes);
	let mut flat = [0u64; 25];

	for (i, lane) in flat.iter_mut().enumerate() {
		*lane = u64::from_le_bytes(bytes[8 * i ..][.. 8].try_into().unwrap());
	}

	for round_index in 0 .. 3 {
		round(&mut state, round_index);
		flat_reference_round(&mut flat, ROUND_CONSTANTS[round_index]);

		let mut expected = [0; STATE_BYTES];

		for (i, lane) in flat.iter().enumerate() {
			expected[8 * i ..][.. 8].copy_from_slice(&lane.to_le_bytes());
		}

		assert_eq!(state.to_bytes(), expected, "round {}", round_index);
	}
}
