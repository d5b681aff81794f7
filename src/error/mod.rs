//! Error types for fingerrs.

use std::fmt;

/// Errors that can occur while computing a fingerprint.
#[derive(Debug)]
pub enum FingerprintError {
    /// No input argument was supplied at the call boundary.
    MissingInput,

    /// The input byte sequence was present but zero-length.
    ///
    /// Empty input is rejected rather than hashed: an empty upload is treated
    /// as invalid input, even though the empty sequence has a well-defined
    /// XXH3 digest.
    EmptyInput,

    /// The incremental path failed to absorb a chunk.
    ///
    /// Not expected during normal operation; surfaced instead of returning a
    /// partial or zero digest.
    Absorption {
        /// Byte offset of the chunk whose absorption failed.
        offset: u64,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for FingerprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FingerprintError::MissingInput => write!(f, "missing input: no argument supplied"),
            FingerprintError::EmptyInput => write!(f, "empty input: refusing to hash zero bytes"),
            FingerprintError::Absorption { offset } => {
                write!(f, "internal hashing failure absorbing chunk at offset {}", offset)
            }
            FingerprintError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for FingerprintError {}
