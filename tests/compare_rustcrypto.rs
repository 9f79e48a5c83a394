//! Byte-for-byte comparison against the RustCrypto `sha3` crate.

use kryptonsponge::keccak256;
use kryptonsponge::sha3::{sha3_224, sha3_256, sha3_384, sha3_512};
use kryptonsponge::sponge::{sponge, SpongeParams};
use proptest::prelude::*;
use sha3::digest::{Digest, ExtendableOutput, Update, XofReader};

fn reference<D: Digest>(input: &[u8]) -> Vec<u8> {
	D::digest(input).to_vec()
}

#[test]
fn block_boundaries_match() {
	for len in [0, 1, 71, 72, 73, 103, 104, 105, 135, 136, 137, 143, 144, 145, 271, 272, 273, 277] {
		let input: Vec<u8> = (0 .. len).map(|i| (i * 7 + 3) as u8).collect();

		assert_eq!(sha3_224(&input)[..], reference::<sha3::Sha3_224>(&input)[..], "sha3-224, len {len}");
		assert_eq!(sha3_256(&input)[..], reference::<sha3::Sha3_256>(&input)[..], "sha3-256, len {len}");
		assert_eq!(sha3_384(&input)[..], reference::<sha3::Sha3_384>(&input)[..], "sha3-384, len {len}");
		assert_eq!(sha3_512(&input)[..], reference::<sha3::Sha3_512>(&input)[..], "sha3-512, len {len}");
	}
}

#[test]
fn original_keccak_matches() {
	let input = b"The quick brown fox jumps over the lazy dog";
	let ours: [u8; 32] = sponge(SpongeParams::ORIGINAL_KECCAK_256, input);

	assert_eq!(ours[..], reference::<sha3::Keccak256>(input)[..]);
}

// SHAKE128 has a 168-byte rate, so a 400-byte output needs three squeezes.
#[test]
fn long_squeeze_matches_shake128() {
	let params = SpongeParams::new(168, 0x1f).unwrap();
	let input = b"squeeze";

	let ours: [u8; 400] = sponge(params, input);

	let mut hasher = sha3::Shake128::default();
	hasher.update(input);
	let mut theirs = [0; 400];
	hasher.finalize_xof().read(&mut theirs);

	assert_eq!(ours, theirs);
}

proptest! {
	#[test]
	fn keccak256_matches_sha3_256(input in proptest::collection::vec(any::<u8>(), 0 .. 600)) {
		prop_assert_eq!(&keccak256(&input)[..], &reference::<sha3::Sha3_256>(&input)[..]);
	}

	#[test]
	fn sha3_512_matches(input in proptest::collection::vec(any::<u8>(), 0 .. 300)) {
		prop_assert_eq!(&sha3_512(&input)[..], &reference::<sha3::Sha3_512>(&input)[..]);
	}
}
