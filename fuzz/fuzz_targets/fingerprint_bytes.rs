#![no_main]

use fingerrs::{FingerprintConfig, FingerprintError, Fingerprinter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // Test with various chunk sizes, including degenerate ones
    let chunk_sizes = [1usize, 3, 64, 4096, 256 * 1024, usize::MAX];

    if data.is_empty() {
        // Empty input is always rejected, never hashed
        for &chunk_size in &chunk_sizes {
            let engine = Fingerprinter::new(FingerprintConfig::new(chunk_size).unwrap());
            assert!(matches!(
                engine.fingerprint(&data),
                Err(FingerprintError::EmptyInput)
            ));
        }
        return;
    }

    // Canonical digest: a threshold no input exceeds forces the bulk path
    let bulk = Fingerprinter::new(FingerprintConfig::new(usize::MAX).unwrap())
        .fingerprint(&data)
        .unwrap();

    for &chunk_size in &chunk_sizes {
        let engine = Fingerprinter::new(FingerprintConfig::new(chunk_size).unwrap());
        let digest = engine.fingerprint(&data).unwrap();

        // Verify: digest never depends on the chunk size or code path
        assert_eq!(digest, bulk);

        // Verify: determinism - same input produces the same digest
        assert_eq!(engine.fingerprint(&data).unwrap(), digest);
    }
});
