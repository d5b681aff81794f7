//! Configuration for fingerprinting behavior.
//!
//! - [`FingerprintConfig`] - Controls the chunk size / path-selection threshold
//!
//! # Example
//!
//! ```
//! use fingerrs::FingerprintConfig;
//!
//! // Custom chunk size (also the bulk/chunked threshold)
//! let config = FingerprintConfig::new(64 * 1024)?;
//!
//! # Ok::<(), fingerrs::FingerprintError>(())
//! ```

use crate::error::FingerprintError;

/// Default chunk size and bulk/chunked threshold (256 KiB).
///
/// A performance tuning constant, not an architectural limit: any chunk size
/// of at least one byte produces the same digest.
pub const DEFAULT_CHUNK_SIZE: usize = 256 * 1024;

/// Configuration for the fingerprint engine.
///
/// One constant does double duty: inputs no longer than `chunk_size` take the
/// one-shot bulk path, larger inputs are absorbed in windows of at most
/// `chunk_size` bytes. The digest never depends on the chosen value.
///
/// # Example
///
/// ```
/// use fingerrs::FingerprintConfig;
///
/// // Use default configuration
/// let config = FingerprintConfig::default();
///
/// // Custom configuration
/// let config = FingerprintConfig::new(64 * 1024)?;
///
/// // Builder pattern
/// let config = FingerprintConfig::default().with_chunk_size(128 * 1024);
/// # Ok::<(), fingerrs::FingerprintError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FingerprintConfig {
    /// Maximum bytes absorbed per incremental step, and the input-size cutoff
    /// above which the incremental path is used.
    chunk_size: usize,
}

impl FingerprintConfig {
    /// Creates a new configuration with the specified chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError::InvalidConfig`] if `chunk_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use fingerrs::FingerprintConfig;
    ///
    /// let config = FingerprintConfig::new(4096)?;
    /// assert_eq!(config.chunk_size(), 4096);
    /// # Ok::<(), fingerrs::FingerprintError>(())
    /// ```
    pub fn new(chunk_size: usize) -> Result<Self, FingerprintError> {
        if chunk_size == 0 {
            return Err(FingerprintError::InvalidConfig {
                message: "chunk size must be non-zero",
            });
        }
        Ok(Self { chunk_size })
    }

    /// Sets the chunk size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`FingerprintConfig::validate`] to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use fingerrs::FingerprintConfig;
    ///
    /// let config = FingerprintConfig::default().with_chunk_size(8192);
    /// assert_eq!(config.chunk_size(), 8192);
    /// ```
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use fingerrs::FingerprintConfig;
    ///
    /// let config = FingerprintConfig::default().with_chunk_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), FingerprintError> {
        Self::new(self.chunk_size).map(|_| ())
    }
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FingerprintConfig::default();
        assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_builder_pattern() {
        let config = FingerprintConfig::default().with_chunk_size(8192);
        assert_eq!(config.chunk_size(), 8192);
    }

    #[test]
    fn test_invalid_config_zero_size() {
        let result = FingerprintConfig::new(0);
        assert!(result.is_err());
    }

    #[test]
    fn test_one_byte_chunk_is_valid() {
        // The equivalence contract holds for any chunk size >= 1.
        let config = FingerprintConfig::new(1).unwrap();
        assert_eq!(config.chunk_size(), 1);
    }

    #[test]
    fn test_validate_catches_builder_zero() {
        let config = FingerprintConfig::default().with_chunk_size(0);
        assert!(config.validate().is_err());
    }
}
