//! fingerrs
//!
//! Chunked 64-bit content fingerprinting for Rust.
//!
//! `fingerrs` computes a deterministic XXH3-64 fingerprint for an in-memory
//! byte sequence. Small inputs are hashed in one shot; inputs above a size
//! threshold are absorbed chunk by chunk through a running accumulator. The
//! two paths always produce the same digest for the same bytes — that
//! equivalence is the crate's core contract.
//!
//! It is designed as a small, composable primitive for:
//!
//! - file-content identity (upload dedup, change detection)
//! - cache keys and content addressing where 64 bits suffice
//! - host-embedded hashing callbacks (WASM, server embeddings, CLIs)
//!
//! The crate intentionally:
//! - does NOT claim any cryptographic strength (XXH3 is fast, not secure)
//! - does NOT manage files, paths, or I/O
//! - does NOT accept data arriving incrementally over time — the full byte
//!   sequence is available up front; chunking is a processing granularity,
//!   not a streaming protocol
//!
//! It only does one thing: **bytes in → 64-bit digest out**
//!
//! # Hashing a buffer
//!
//! ```
//! use fingerrs::{Fingerprinter, FingerprintConfig};
//!
//! let engine = Fingerprinter::new(FingerprintConfig::default());
//! let digest = engine.fingerprint(b"abc")?;
//!
//! // Digests render as decimal text at the call boundary.
//! assert_eq!(digest.to_string(), "8696274497037089104");
//! # Ok::<(), fingerrs::FingerprintError>(())
//! ```
//!
//! # Embedding in a host
//!
//! ```
//! use bytes::Bytes;
//! use fingerrs::host::{self, Registry};
//! use fingerrs::Fingerprinter;
//!
//! let mut registry = Registry::new();
//! host::register_defaults(&mut registry, Fingerprinter::default());
//!
//! let reply = registry.dispatch("hashFile", &[Bytes::from_static(b"abc")]);
//! assert_eq!(reply.as_deref(), Some("8696274497037089104"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod digest;
mod engine;
mod error;

mod hash; // internal xxh3 accumulator

pub mod host;

//
// Public surface (intentionally tiny)
//

pub use config::{DEFAULT_CHUNK_SIZE, FingerprintConfig};
pub use digest::Digest;
pub use engine::Fingerprinter;
pub use error::FingerprintError;
