//! XXH3-64 accumulator implementation.

use xxhash_rust::xxh3::{Xxh3, xxh3_64};

use crate::digest::Digest;
use crate::error::FingerprintError;

/// Incremental XXH3-64 state for one fingerprint computation.
///
/// An accumulator's state depends on absorption order, so chunks must be
/// absorbed strictly in sequence and an accumulator must never be shared
/// across computations. Finalization consumes the accumulator; a fresh one is
/// built per call.
pub(crate) struct Xxh3Accumulator {
    state: Xxh3,
    absorbed: u64,
}

impl Default for Xxh3Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Xxh3Accumulator {
    /// Creates a fresh accumulator (seed 0).
    pub fn new() -> Self {
        Self {
            state: Xxh3::new(),
            absorbed: 0,
        }
    }

    /// Absorbs the next chunk of input.
    ///
    /// XXH3 absorption cannot fail today; the `Result` is the seam through
    /// which a failing backend would surface an internal hashing failure
    /// instead of yielding a partial digest.
    pub fn absorb(&mut self, chunk: &[u8]) -> Result<(), FingerprintError> {
        self.state.update(chunk);
        self.absorbed += chunk.len() as u64;
        Ok(())
    }

    /// Returns the number of bytes absorbed so far.
    #[allow(dead_code)]
    pub(crate) fn absorbed(&self) -> u64 {
        self.absorbed
    }

    /// Consumes the accumulator and returns the digest.
    pub fn finalize(self) -> Digest {
        Digest::new(self.state.digest())
    }

    /// Hashes a whole buffer in one shot (the bulk path).
    pub fn oneshot(data: &[u8]) -> Digest {
        Digest::new(xxh3_64(data))
    }
}
