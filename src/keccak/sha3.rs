//! An implementation of [SHA-3](https://en.wikipedia.org/wiki/SHA-3).

use super::sponge::{sponge, SpongeParams};

/// Returns the SHA3-224 digest of the byte slice passed to it.
pub fn sha3_224(bytes: &[u8]) -> [u8; 28] {
	sponge(SpongeParams::SHA3_224, bytes)
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sha3_256(bytes: &[u8]) -> [u8; 32] {
	sponge(SpongeParams::SHA3_256, bytes)
}

/// Returns the SHA3-384 digest of the byte slice passed to it.
pub fn sha3_384(bytes: &[u8]) -> [u8; 48] {
	sponge(SpongeParams::SHA3_384, bytes)
}

/// Returns the SHA3-512 digest of the byte slice passed to it.
pub fn sha3_512(bytes: &[u8]) -> [u8; 64] {
	sponge(SpongeParams::SHA3_512, bytes)
}

#[cfg(test)]
fn format_hash<I: AsRef<[u8]>>(
	hasher: impl FnOnce(&[u8]) -> I,
	input: &[u8],
) -> String {
	use std::fmt::Write;

	let mut out = String::new();

	for &byte in hasher(input).as_ref() {
		write!(out, "{:>02x}", byte).unwrap();
	}

	out
}

#[test]
fn test_empty_inputs() {
	assert_eq!(
		format_hash(sha3_224, b""),
		"6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
	);

	assert_eq!(
		format_hash(sha3_256, b""),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);

	assert_eq!(
		format_hash(sha3_384, b""),
		"0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
	);

	assert_eq!(
		format_hash(sha3_512, b""),
		"a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
	);
}

#[test]
fn test_abc() {
	assert_eq!(
		format_hash(sha3_224, b"abc"),
		"e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
	);

	assert_eq!(
		format_hash(sha3_256, b"abc"),
		"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
	);

	assert_eq!(
		format_hash(sha3_384, b"abc"),
		"ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25",
	);

	assert_eq!(
		format_hash(sha3_512, b"abc"),
		"b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
	);
}

#[test]
fn test_original_keccak_256() {
	assert_eq!(
		format_hash(|bytes| sponge::<32>(SpongeParams::ORIGINAL_KECCAK_256, bytes), b""),
		"c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
	);
}
