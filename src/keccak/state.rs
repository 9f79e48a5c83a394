//! The 1600-bit Keccak state.
//!
//! The state is a 5×5 grid of 64-bit lanes, stored as `lanes[x][y]`. When
//! viewed as bytes, lane `(x, y)` occupies bytes `8 * (5 * y + x) ..` up to
//! the next eight, least significant byte first. Every byte-level operation
//! in this module goes through that mapping.

/// Size of the serialized state in bytes.
pub const STATE_BYTES: usize = 200;

const LANE_BYTES: usize = 8;

/// Rotates `val` left by `amount` bits. Amounts of 64 or more wrap around,
/// so `rotl64(val, 0)` and `rotl64(val, 64)` both return `val`.
pub fn rotl64(val: u64, amount: u32) -> u64 {
	val.rotate_left(amount % 64)
}

/// The Keccak-f[1600] state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
	pub(crate) lanes: [[u64; 5]; 5],
}

impl State {
	/// Creates the all-zero state.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lane(&self, x: usize, y: usize) -> u64 {
		self.lanes[x][y]
	}

	pub fn set_lane(&mut self, x: usize, y: usize, val: u64) {
		self.lanes[x][y] = val;
	}

	/// Serializes the state into its 200-byte representation.
	pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
		let mut out = [0; STATE_BYTES];
		self.extract_bytes(&mut out);
		out
	}

	/// Inverse of [`State::to_bytes`].
	pub fn from_bytes(bytes: &[u8; STATE_BYTES]) -> Self {
		let mut state = Self::new();
		state.xor_bytes(bytes);
		state
	}

	/// XORs `bytes` into the leading bytes of the state.
	/// The remaining bytes are left untouched.
	pub(crate) fn xor_bytes(&mut self, bytes: &[u8]) {
		debug_assert!(bytes.len() <= STATE_BYTES);

		for (i, chunk) in bytes.chunks(LANE_BYTES).enumerate() {
			let mut buf = [0; LANE_BYTES];
			buf[.. chunk.len()].copy_from_slice(chunk);

			self.lanes[i % 5][i / 5] ^= u64::from_le_bytes(buf);
		}
	}

	/// Fills `out` with the leading bytes of the state.
	pub(crate) fn extract_bytes(&self, out: &mut [u8]) {
		debug_assert!(out.len() <= STATE_BYTES);

		for (i, chunk) in out.chunks_mut(LANE_BYTES).enumerate() {
			let bytes = self.lanes[i % 5][i / 5].to_le_bytes();
			chunk.copy_from_slice(&bytes[.. chunk.len()]);
		}
	}
}

#[cfg(test)]
fn counting_state() -> State {
	let mut bytes = [0; STATE_BYTES];

	for (i, byte) in bytes.iter_mut().enumerate() {
		*byte = i as u8;
	}

	State::from_bytes(&bytes)
}

#[test]
fn lane_byte_mapping() {
	let state = counting_state();

	// lane (1, 2) starts at byte 8 * (5 * 2 + 1) = 88
	assert_eq!(state.lane(1, 2), u64::from_le_bytes([88, 89, 90, 91, 92, 93, 94, 95]));
	assert_eq!(state.lane(0, 0), 0x0706050403020100);
	assert_eq!(state.lane(4, 4), u64::from_le_bytes([192, 193, 194, 195, 196, 197, 198, 199]));
}

#[test]
fn set_lane_lands_in_serialized_bytes() {
	let mut state = State::new();
	state.set_lane(3, 1, 0x1122334455667788);

	let bytes = state.to_bytes();
	let offset = 8 * (5 * 1 + 3);

	assert_eq!(bytes[offset ..][.. 8], [0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
	assert_eq!(bytes.iter().filter(|&&b| b != 0).count(), 8);
}

#[test]
fn partial_lane_xor_and_extract() {
	let mut state = State::new();
	state.xor_bytes(&[0xff; 13]);

	assert_eq!(state.lane(0, 0), u64::MAX);
	assert_eq!(state.lane(1, 0), 0x000000ffffffffff);
	assert_eq!(state.lane(2, 0), 0);

	let mut out = [0; 11];
	counting_state().extract_bytes(&mut out);
	assert_eq!(out, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn rotl64_wraps_amount() {
	let val = 0x8000000000000001;

	assert_eq!(rotl64(val, 0), val);
	assert_eq!(rotl64(val, 64), val);
	assert_eq!(rotl64(val, 1), 0x0000000000000003);
	assert_eq!(rotl64(val, 65), 0x0000000000000003);
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn rotl64_identities(val in any::<u64>(), amount in 1u32 .. 64) {
			prop_assert_eq!(rotl64(val, 0), val);
			prop_assert_eq!(rotl64(val, 64), val);
			prop_assert_eq!(rotl64(rotl64(val, amount), 64 - amount), val);
		}

		#[test]
		fn serialization_round_trip(lanes in proptest::array::uniform25(any::<u64>())) {
			let mut state = State::new();

			for (i, lane) in lanes.into_iter().enumerate() {
				state.set_lane(i % 5, i / 5, lane);
			}

			prop_assert_eq!(State::from_bytes(&state.to_bytes()), state);
		}

		#[test]
		fn bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), STATE_BYTES)) {
			let bytes: [u8; STATE_BYTES] = bytes.try_into().unwrap();
			prop_assert_eq!(State::from_bytes(&bytes).to_bytes(), bytes);
		}
	}
}
