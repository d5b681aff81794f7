//! Basic fingerprinting example straddling the bulk/chunked threshold.
//!
//! Run with:
//!     cargo run --example hash_bytes

use fingerrs::{DEFAULT_CHUNK_SIZE, FingerprintConfig, Fingerprinter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Fingerprinter::new(FingerprintConfig::default());

    // Small input: bulk path
    let small = b"hello fingerprint";
    println!("bulk    {:>10} bytes -> {}", small.len(), engine.fingerprint(small)?);

    // Large input: chunked path (1 MiB, four 256 KiB windows)
    let large = vec![0xA5u8; 4 * DEFAULT_CHUNK_SIZE];
    println!("chunked {:>10} bytes -> {}", large.len(), engine.fingerprint(&large)?);

    // Same bytes with a different chunk size: same digest
    let other = Fingerprinter::new(FingerprintConfig::new(64 * 1024)?);
    println!("64k win {:>10} bytes -> {}", large.len(), other.fingerprint(&large)?);

    Ok(())
}
