//! The fingerprint engine.
//!
//! - [`Fingerprinter`] - threshold-aware engine with bulk and chunked paths

mod core;

pub use core::Fingerprinter;
