//! Core fingerprint engine - path selection and the chunked absorb loop.
//!
//! This module implements the synchronous fingerprinting API:
//!
//! - [`Fingerprinter`] - selects the bulk or chunked path by input size
//! - `fingerprint()` - bytes in, 64-bit digest out
//!
//! # Example
//!
//! ```
//! use fingerrs::{Fingerprinter, FingerprintConfig};
//!
//! let engine = Fingerprinter::new(FingerprintConfig::default());
//! let digest = engine.fingerprint(b"some file content")?;
//! println!("digest {}", digest);
//! # Ok::<(), fingerrs::FingerprintError>(())
//! ```

use bytes::Bytes;

use crate::config::FingerprintConfig;
use crate::digest::Digest;
use crate::error::FingerprintError;
use crate::hash::Xxh3Accumulator;

/// An engine that fingerprints byte sequences with XXH3-64.
///
/// Inputs no longer than the configured chunk size take the **bulk path**: the
/// whole buffer is hashed in one call. Larger inputs take the **chunked
/// path**: the buffer is partitioned into consecutive windows of at most the
/// chunk size and absorbed in order through a fresh running accumulator.
///
/// # Equivalence
///
/// Both paths produce the same digest for the same bytes, for every chunk
/// size of at least one byte and every boundary case (input exactly at the
/// threshold, one past it, exact multiples of the chunk size). The chunk size
/// is a performance knob, never an input to the hash.
///
/// # Concurrency
///
/// All methods take `&self`; the engine holds no per-call state. Each call
/// builds its own accumulator, so independent calls never share mutable
/// state. Within one call, absorption is strictly sequential — accumulator
/// state is order-dependent.
///
/// # Example
///
/// ```
/// use fingerrs::{Fingerprinter, FingerprintConfig};
///
/// let engine = Fingerprinter::new(FingerprintConfig::new(64 * 1024)?);
///
/// // 1 MiB input: chunked path, 16 windows
/// let data = vec![0xA5u8; 1024 * 1024];
/// let chunked = engine.fingerprint(&data)?;
///
/// // Same bytes through a bulk-sized engine: same digest
/// let bulk = Fingerprinter::new(FingerprintConfig::new(2 * 1024 * 1024)?)
///     .fingerprint(&data)?;
/// assert_eq!(chunked, bulk);
/// # Ok::<(), fingerrs::FingerprintError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Fingerprinter {
    config: FingerprintConfig,
}

impl Fingerprinter {
    /// Creates a new engine with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use fingerrs::{Fingerprinter, FingerprintConfig};
    ///
    /// let engine = Fingerprinter::new(FingerprintConfig::default());
    /// ```
    pub fn new(config: FingerprintConfig) -> Self {
        Self { config }
    }

    /// Computes the digest of a byte sequence.
    ///
    /// # Errors
    ///
    /// - [`FingerprintError::EmptyInput`] if `data` is zero-length. Empty
    ///   input is rejected by contract, not hashed.
    /// - [`FingerprintError::Absorption`] if the incremental path fails to
    ///   absorb a chunk (not expected in normal operation).
    ///
    /// # Example
    ///
    /// ```
    /// use fingerrs::{Fingerprinter, FingerprintError};
    ///
    /// let engine = Fingerprinter::default();
    ///
    /// let digest = engine.fingerprint(b"abc")?;
    /// assert_eq!(digest.value(), 0x78af5f94892f3950);
    ///
    /// assert!(matches!(
    ///     engine.fingerprint(b""),
    ///     Err(FingerprintError::EmptyInput)
    /// ));
    /// # Ok::<(), FingerprintError>(())
    /// ```
    pub fn fingerprint(&self, data: &[u8]) -> Result<Digest, FingerprintError> {
        if data.is_empty() {
            return Err(FingerprintError::EmptyInput);
        }

        // "Above" is strict: an input of exactly chunk_size stays on the
        // bulk path.
        if data.len() <= self.config.chunk_size() {
            return Ok(Xxh3Accumulator::oneshot(data));
        }

        self.fingerprint_chunked(data)
    }

    /// Convenience for host-boundary buffers.
    ///
    /// Equivalent to [`Fingerprinter::fingerprint`] on the buffer's contents.
    pub fn fingerprint_bytes(&self, data: &Bytes) -> Result<Digest, FingerprintError> {
        self.fingerprint(data.as_ref())
    }

    /// Returns the configuration used by this engine.
    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    /// The chunked path: absorb consecutive windows in order, finalize once.
    fn fingerprint_chunked(&self, data: &[u8]) -> Result<Digest, FingerprintError> {
        let chunk_size = self.config.chunk_size();
        let mut accumulator = Xxh3Accumulator::new();

        let mut offset = 0usize;
        while offset < data.len() {
            let end = usize::min(offset + chunk_size, data.len());
            let chunk = &data[offset..end];

            // Guard against a malformed partition looping forever; a correct
            // partition never produces an empty chunk.
            if chunk.is_empty() {
                break;
            }

            accumulator.absorb(chunk)?;
            offset = end;
        }

        Ok(accumulator.finalize())
    }
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::new(FingerprintConfig::default())
    }
}
