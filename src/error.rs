use thiserror::Error;

/// Errors raised when building custom sponge parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
	/// The rate must leave a non-empty capacity and absorb at least one byte.
	#[error("sponge rate must be between 1 and 199 bytes, got {rate_bytes}")]
	InvalidRate { rate_bytes: usize },

	/// The domain suffix must carry the first padding bit without touching the last one.
	#[error("domain suffix {suffix:#04x} must be non-zero and below 0x80")]
	InvalidSuffix { suffix: u8 },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
