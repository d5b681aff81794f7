//! The Digest type - a 64-bit content fingerprint.

use std::fmt;

/// A 64-bit fingerprint of a byte sequence.
///
/// This is a thin wrapper around a `u64` (XXH3-64 output). At the call
/// boundary digests are rendered as decimal text, which is what
/// [`Display`](fmt::Display) produces.
///
/// # Example
///
/// ```
/// use fingerrs::Digest;
///
/// let digest = Digest::new(8696274497037089104);
/// assert_eq!(digest.to_string(), "8696274497037089104");
/// assert_eq!(digest.value(), 8696274497037089104);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(u64);

impl Digest {
    /// The size of the digest in bits.
    pub const BITS: u32 = 64;

    /// Creates a digest from its raw 64-bit value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw 64-bit value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Renders the digest as its decimal textual representation.
    ///
    /// Equivalent to `to_string()`; this is the boundary format.
    pub fn to_decimal(&self) -> String {
        self.0.to_string()
    }

    /// Parses a digest from its decimal textual representation.
    ///
    /// Returns `None` if the string is not a valid decimal `u64`.
    pub fn from_decimal(text: &str) -> Option<Self> {
        text.parse::<u64>().ok().map(Self)
    }
}

impl From<u64> for Digest {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Digest> for u64 {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
