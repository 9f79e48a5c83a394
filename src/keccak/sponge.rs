//! The sponge construction over Keccak-f[1600].
//!
//! Input is padded with pad10*1 behind a domain suffix, absorbed one
//! rate-sized block at a time, and the digest is squeezed from the leading
//! rate bytes of the state.

use tracing::trace;

use super::{keccak_f1600, State, STATE_BYTES};
use crate::{Error, Result};

const SHA3_SUFFIX: u8 = 0x06;
const ORIGINAL_KECCAK_SUFFIX: u8 = 0x01;

/// Rate and domain suffix of a sponge instance.
///
/// The suffix byte holds the domain separation bits followed by the first
/// `1` of the padding, so SHA-3 uses `0x06` and the original Keccak
/// submission uses `0x01`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpongeParams {
	rate_bytes: usize,
	suffix: u8,
}

impl SpongeParams {
	pub const SHA3_224: Self = Self {rate_bytes: 144, suffix: SHA3_SUFFIX};
	pub const SHA3_256: Self = Self {rate_bytes: 136, suffix: SHA3_SUFFIX};
	pub const SHA3_384: Self = Self {rate_bytes: 104, suffix: SHA3_SUFFIX};
	pub const SHA3_512: Self = Self {rate_bytes: 72, suffix: SHA3_SUFFIX};

	/// Keccak-256 as submitted to the SHA-3 competition, before the domain bits were added.
	pub const ORIGINAL_KECCAK_256: Self = Self {rate_bytes: 136, suffix: ORIGINAL_KECCAK_SUFFIX};

	pub fn new(rate_bytes: usize, suffix: u8) -> Result<Self> {
		if rate_bytes == 0 || rate_bytes >= STATE_BYTES {
			return Err(Error::InvalidRate {rate_bytes});
		}

		if suffix == 0 || suffix >= 0x80 {
			return Err(Error::InvalidSuffix {suffix});
		}

		Ok(Self {rate_bytes, suffix})
	}

	pub const fn rate_bytes(&self) -> usize {
		self.rate_bytes
	}

	pub const fn capacity_bytes(&self) -> usize {
		STATE_BYTES - self.rate_bytes
	}

	pub const fn suffix(&self) -> u8 {
		self.suffix
	}
}

/// Splits the input into rate-sized blocks, padding the last one.
///
/// Each item is a full state-sized buffer; only its first `rate_bytes` bytes
/// are meaningful. An input that fills its last block exactly is followed by
/// a block made only of padding.
struct Padding<'a> {
	bytes: &'a [u8],
	params: SpongeParams,
	done: bool,
}

impl<'a> Padding<'a> {
	fn new(bytes: &'a [u8], params: SpongeParams) -> Self {
		Self {bytes, params, done: false}
	}
}

impl<'a> Iterator for Padding<'a> {
	type Item = [u8; STATE_BYTES];

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let rate = self.params.rate_bytes;
		let mut buf = [0; STATE_BYTES];

		if self.bytes.len() >= rate {
			buf[.. rate].copy_from_slice(&self.bytes[.. rate]);
			self.bytes = &self.bytes[rate ..];
		} else {
			buf[.. self.bytes.len()].copy_from_slice(self.bytes);
			buf[self.bytes.len()] |= self.params.suffix;
			buf[rate - 1] |= 0x80;
			self.done = true;
		}

		Some(buf)
	}
}

/// Pads and absorbs every block of `input`, returning how many blocks
/// (and therefore permutation calls) it took.
fn absorb(state: &mut State, params: SpongeParams, input: &[u8]) -> usize {
	let mut blocks = 0;

	for block in Padding::new(input, params) {
		state.xor_bytes(&block[.. params.rate_bytes]);
		keccak_f1600(state);

		blocks += 1;
	}

	blocks
}

/// Fills `out` from the rate portion of the state, permuting again before
/// each further rate-sized chunk.
fn squeeze(state: &mut State, params: SpongeParams, out: &mut [u8]) {
	for (i, chunk) in out.chunks_mut(params.rate_bytes).enumerate() {
		if i > 0 {
			keccak_f1600(state);
		}

		state.extract_bytes(chunk);
	}
}

/// Hashes `input` with the given sponge parameters into an `N`-byte digest.
///
/// Outputs longer than the rate are squeezed over several permutations.
pub fn sponge<const N: usize>(params: SpongeParams, input: &[u8]) -> [u8; N] {
	let mut state = State::new();

	let blocks = absorb(&mut state, params, input);
	trace!(rate_bytes = params.rate_bytes, input_len = input.len(), blocks, "absorbed");

	let mut out = [0; N];
	squeeze(&mut state, params, &mut out);
	trace!(rate_bytes = params.rate_bytes, digest_bytes = N, "squeezed");

	out
}

#[cfg(test)]
fn padded_blocks(len: usize, params: SpongeParams) -> Vec<[u8; STATE_BYTES]> {
	let input = vec![0xaa; len];
	Padding::new(&input, params).collect()
}

#[test]
fn padding_of_empty_input() {
	let blocks = padded_blocks(0, SpongeParams::SHA3_256);

	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0][0], 0x06);
	assert!(blocks[0][1 .. 135].iter().all(|&b| b == 0));
	assert_eq!(blocks[0][135], 0x80);
	assert!(blocks[0][136 ..].iter().all(|&b| b == 0));
}

#[test]
fn padding_with_one_free_byte() {
	let blocks = padded_blocks(135, SpongeParams::SHA3_256);

	assert_eq!(blocks.len(), 1);
	assert!(blocks[0][.. 135].iter().all(|&b| b == 0xaa));
	assert_eq!(blocks[0][135], 0x86);
}

#[test]
fn padding_of_full_block_adds_a_block() {
	let blocks = padded_blocks(136, SpongeParams::SHA3_256);

	assert_eq!(blocks.len(), 2);
	assert!(blocks[0][.. 136].iter().all(|&b| b == 0xaa));
	assert_eq!(blocks[1][0], 0x06);
	assert!(blocks[1][1 .. 135].iter().all(|&b| b == 0));
	assert_eq!(blocks[1][135], 0x80);
}

#[test]
fn padding_uses_params_suffix() {
	let blocks = padded_blocks(3, SpongeParams::ORIGINAL_KECCAK_256);

	assert_eq!(blocks[0][3], 0x01);
	assert_eq!(blocks[0][135], 0x80);
}

#[test]
fn absorbs_every_block() {
	let params = SpongeParams::SHA3_256;
	let input: Vec<u8> = (0 .. 2 * 136 + 5).map(|i| i as u8).collect();

	let mut state = State::new();
	assert_eq!(absorb(&mut state, params, &input), 3);

	let full: [u8; 32] = sponge(params, &input);
	let first_block: [u8; 32] = sponge(params, &input[.. 136]);
	let two_blocks: [u8; 32] = sponge(params, &input[.. 272]);

	assert_ne!(full, first_block);
	assert_ne!(full, two_blocks);
}

#[test]
fn capacity_is_not_touched_by_absorption() {
	let params = SpongeParams::SHA3_256;

	let mut state = State::new();
	keccak_f1600(&mut state);
	let before = state.to_bytes();

	state.xor_bytes(&[0xff; 136]);
	let after = state.to_bytes();

	assert_eq!(before[136 ..], after[136 ..]);
	assert_eq!(params.capacity_bytes(), 64);
}

#[test]
fn squeeze_continues_past_the_rate() {
	let params = SpongeParams::new(16, SHA3_SUFFIX).unwrap();

	let long: [u8; 40] = sponge(params, b"abc");

	let mut state = State::new();
	absorb(&mut state, params, b"abc");

	let mut expected = [0; 40];
	state.extract_bytes(&mut expected[.. 16]);
	keccak_f1600(&mut state);
	state.extract_bytes(&mut expected[16 .. 32]);
	keccak_f1600(&mut state);
	state.extract_bytes(&mut expected[32 ..]);

	assert_eq!(long, expected);

	let short: [u8; 16] = sponge(params, b"abc");
	assert_eq!(short, long[.. 16]);
}

#[test]
fn invalid_params_are_rejected() {
	assert_eq!(SpongeParams::new(0, 0x06), Err(Error::InvalidRate {rate_bytes: 0}));
	assert_eq!(SpongeParams::new(200, 0x06), Err(Error::InvalidRate {rate_bytes: 200}));
	assert_eq!(SpongeParams::new(136, 0x00), Err(Error::InvalidSuffix {suffix: 0x00}));
	assert_eq!(SpongeParams::new(136, 0x86), Err(Error::InvalidSuffix {suffix: 0x86}));

	assert_eq!(SpongeParams::new(136, 0x06), Ok(SpongeParams::SHA3_256));
	assert_eq!(SpongeParams::new(199, 0x1f).map(|p| p.capacity_bytes()), Ok(1));
}

#[test]
fn one_byte_rate_combines_suffix_and_final_bit() {
	let params = SpongeParams::new(1, SHA3_SUFFIX).unwrap();
	let blocks = padded_blocks(2, params);

	assert_eq!(blocks.len(), 3);
	assert_eq!(blocks[2][0], 0x86);
}
