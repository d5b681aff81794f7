//! The running accumulator backing the incremental path.
//!
//! This module wraps the XXH3-64 primitive behind the small absorb/finalize
//! surface the engine needs. It is an implementation detail and not part of
//! the public API.
//!
//! - [`Xxh3Accumulator`] - incremental XXH3-64 state, one per computation

mod xxh3;

pub(crate) use xxh3::Xxh3Accumulator;
