#![cfg_attr(not(feature = "std"), no_std)]

//! The Keccak-f[1600] permutation and the SHA-3 hash functions built on it.
//!
//! ```
//! let digest = kryptonsponge::keccak256(b"abc");
//! assert_eq!(digest[.. 4], [0x3a, 0x98, 0x5d, 0xa7]);
//! ```

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

pub mod keccak;

mod error;

pub use error::{Error, Result};

#[doc(inline)]
pub use keccak::sha3;

#[doc(inline)]
pub use keccak::sponge;

/// Returns the SHA3-256 digest of the byte slice passed to it.
///
/// Each call owns its own state, so this can be called from any number of
/// threads at once.
pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
	sha3::sha3_256(bytes)
}

#[test]
fn keccak256_is_sha3_256() {
	let input = [0x5a; 300];

	assert_eq!(keccak256(&input), sha3::sha3_256(&input));
	assert_eq!(keccak256(b"abc"), keccak256(b"abc"));
	assert_ne!(keccak256(b"abc"), keccak256(&keccak256(b"abc")));
}
