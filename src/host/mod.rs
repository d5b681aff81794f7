//! Host call-boundary adapter.
//!
//! The engine is a pure function from bytes to digest; this module is the
//! thin plumbing that exposes it to a hosting runtime:
//!
//! - [`Registry`] - named entry points, registered once at startup
//! - [`hash_file`] - the fingerprinting entry point's calling convention
//! - [`serve`] - blocking loop that keeps the process answering calls
//!
//! The calling convention is deliberately loose: a call carries argument
//! buffers and returns either a string value or `None`. On failure the reason
//! goes to the diagnostic channel (`tracing`), not into the return value —
//! hosts see "log and return nothing" rather than a structured exception.
//!
//! The boundary layer owns argument validation and the byte copy into linear
//! buffers; the engine trusts that a buffer's length is accurate.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use fingerrs::Fingerprinter;
//! use fingerrs::host::{self, Registry};
//!
//! let mut registry = Registry::new();
//! host::register_defaults(&mut registry, Fingerprinter::default());
//!
//! let digest = registry.dispatch("hashFile", &[Bytes::from_static(b"abc")]);
//! assert_eq!(digest.as_deref(), Some("8696274497037089104"));
//!
//! // Failed calls return nothing; the reason is logged.
//! assert!(registry.dispatch("hashFile", &[]).is_none());
//! ```

mod registry;

use std::sync::mpsc;

use bytes::Bytes;

use crate::engine::Fingerprinter;

pub use registry::{Callback, Registry};

/// The host name under which the fingerprinting entry point is registered.
pub const HASH_FILE: &str = "hashFile";

/// Fingerprints a file buffer under the host calling convention.
///
/// Requires at least one argument: the file content as a raw byte buffer.
/// Returns the digest as decimal text on success. On any failure — missing
/// argument, empty buffer, internal hashing failure — emits a diagnostic and
/// returns `None`. No failure is fatal to the process; the host can keep
/// making calls.
pub fn hash_file(engine: &Fingerprinter, args: &[Bytes]) -> Option<String> {
    let Some(data) = args.first() else {
        tracing::error!("usage: hashFile(fileData)");
        return None;
    };

    match engine.fingerprint_bytes(data) {
        Ok(digest) => Some(digest.to_decimal()),
        Err(e) => {
            tracing::error!(error = %e, "failed to fingerprint file data");
            None
        }
    }
}

/// Registers the default entry points, binding `engine` into the callbacks.
///
/// Currently that is [`hash_file`] under [`HASH_FILE`]. One-time startup
/// registration; the host dispatches by name afterwards.
pub fn register_defaults(registry: &mut Registry, engine: Fingerprinter) {
    registry.register(HASH_FILE, move |args: &[Bytes]| hash_file(&engine, args));
}

/// One dispatch request travelling over the serve channel.
#[derive(Debug)]
pub struct HostRequest {
    /// Name of the entry point to call.
    pub entry: String,
    /// Argument buffers for the call.
    pub args: Vec<Bytes>,
    /// Where the call's value is sent back.
    pub reply: mpsc::Sender<Option<String>>,
}

/// Serves dispatch requests until every caller handle is dropped.
///
/// Callback-driven hosts need the process to stay alive and callable
/// indefinitely; this is the blocking-wait primitive for that. Each request
/// is answered synchronously in arrival order. A caller that has dropped its
/// reply receiver is skipped, not an error.
pub fn serve(registry: &Registry, calls: mpsc::Receiver<HostRequest>) {
    for request in calls {
        let value = registry.dispatch(&request.entry, &request.args);
        let _ = request.reply.send(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn registry_with_defaults() -> Registry {
        let mut registry = Registry::new();
        register_defaults(&mut registry, Fingerprinter::default());
        registry
    }

    #[test]
    fn test_hash_file_returns_decimal_digest() {
        let engine = Fingerprinter::default();
        let value = hash_file(&engine, &[Bytes::from_static(b"abc")]);
        assert_eq!(value.as_deref(), Some("8696274497037089104"));
    }

    #[test]
    fn test_hash_file_missing_argument() {
        let engine = Fingerprinter::default();
        assert!(hash_file(&engine, &[]).is_none());
    }

    #[test]
    fn test_hash_file_empty_buffer() {
        let engine = Fingerprinter::default();
        assert!(hash_file(&engine, &[Bytes::new()]).is_none());
    }

    #[test]
    fn test_failures_do_not_poison_later_calls() {
        let registry = registry_with_defaults();

        assert!(registry.dispatch(HASH_FILE, &[]).is_none());
        assert!(registry.dispatch(HASH_FILE, &[Bytes::new()]).is_none());

        let value = registry.dispatch(HASH_FILE, &[Bytes::from_static(b"abc")]);
        assert_eq!(value.as_deref(), Some("8696274497037089104"));
    }

    #[test]
    fn test_serve_answers_until_callers_drop() {
        let (call_tx, call_rx) = mpsc::channel::<HostRequest>();

        let server = thread::spawn(move || {
            let registry = registry_with_defaults();
            serve(&registry, call_rx);
        });

        let (reply_tx, reply_rx) = mpsc::channel();
        call_tx
            .send(HostRequest {
                entry: HASH_FILE.to_string(),
                args: vec![Bytes::from_static(b"abc")],
                reply: reply_tx,
            })
            .unwrap();

        let value = reply_rx.recv().unwrap();
        assert_eq!(value.as_deref(), Some("8696274497037089104"));

        // Dropping the last sender ends the loop.
        drop(call_tx);
        server.join().unwrap();
    }
}
