//! Host embedding example: register the entry point, serve calls, shut down.
//!
//! Run with:
//!     cargo run --example host_loop

use std::sync::mpsc;
use std::thread;

use bytes::Bytes;
use fingerrs::Fingerprinter;
use fingerrs::host::{self, HostRequest, Registry};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let (call_tx, call_rx) = mpsc::channel::<HostRequest>();

    // The "process": registers once at startup, then blocks serving calls
    // until the host drops its handle.
    let server = thread::spawn(move || {
        let mut registry = Registry::new();
        host::register_defaults(&mut registry, Fingerprinter::default());
        host::serve(&registry, call_rx);
    });

    // The "host": a few calls, including ones that fail.
    for content in [&b"abc"[..], &b""[..], &b"some larger file content"[..]] {
        let (reply_tx, reply_rx) = mpsc::channel();
        call_tx
            .send(HostRequest {
                entry: host::HASH_FILE.to_string(),
                args: vec![Bytes::copy_from_slice(content)],
                reply: reply_tx,
            })
            .expect("server alive");

        match reply_rx.recv().expect("server replies") {
            Some(digest) => println!("{:>4} bytes -> {}", content.len(), digest),
            None => println!("{:>4} bytes -> (no digest, see diagnostics)", content.len()),
        }
    }

    drop(call_tx);
    server.join().expect("server thread");
}
