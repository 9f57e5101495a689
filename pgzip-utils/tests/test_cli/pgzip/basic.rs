use crate::add_test;
use crate::common::{generate_random_data, run_pgzip, BINARY_DATA, REPETITIVE_DATA, SAMPLE_TEXT};
use crate::{KB, MB};

// Test basic compression and decompression through the real binary
add_test!(roundtrip_text, async {
    let compressed = run_pgzip(&[], SAMPLE_TEXT.as_bytes()).await;
    assert!(compressed.status.success());
    assert!(!compressed.stdout_raw.is_empty());

    let decompressed = run_pgzip(&["-d"], &compressed.stdout_raw).await;
    assert!(decompressed.status.success());
    assert!(decompressed.stdout_raw == SAMPLE_TEXT.as_bytes());
});

// Compressed output must carry gzip framing
add_test!(output_is_gzip_framed, async {
    let compressed = run_pgzip(&[], SAMPLE_TEXT.as_bytes()).await;
    assert!(compressed.status.success());
    assert!(compressed.stdout_raw.starts_with(&[0x1f, 0x8b]));
});

// Test the long decompression flag
add_test!(long_decompress_flag, async {
    let compressed = run_pgzip(&[], BINARY_DATA).await;
    assert!(compressed.status.success());

    let decompressed = run_pgzip(&["--decompress"], &compressed.stdout_raw).await;
    assert!(decompressed.status.success());
    assert!(decompressed.stdout_raw == BINARY_DATA);
});

// Test empty input
add_test!(roundtrip_empty_input, async {
    let compressed = run_pgzip(&[], b"").await;
    assert!(compressed.status.success());
    // Framing alone is emitted for an empty payload.
    assert!(!compressed.stdout_raw.is_empty());

    let decompressed = run_pgzip(&["-d"], &compressed.stdout_raw).await;
    assert!(decompressed.status.success());
    assert!(decompressed.stdout_raw.is_empty());
});

// Test one-byte input
add_test!(roundtrip_one_byte, async {
    let compressed = run_pgzip(&[], b"x").await;
    assert!(compressed.status.success());

    let decompressed = run_pgzip(&["-d"], &compressed.stdout_raw).await;
    assert!(decompressed.status.success());
    assert!(decompressed.stdout_raw == b"x");
});

// Test a payload large enough to span many compression blocks
add_test!(roundtrip_large_random, async {
    let data = generate_random_data(4 * MB);

    let compressed = run_pgzip(&[], &data).await;
    assert!(compressed.status.success());

    let decompressed = run_pgzip(&["-d"], &compressed.stdout_raw).await;
    assert!(decompressed.status.success());
    assert!(decompressed.stdout_raw == data);
});

// Test an all-zero payload
add_test!(roundtrip_null_bytes, async {
    let data = vec![0u8; 64 * KB];

    let compressed = run_pgzip(&[], &data).await;
    assert!(compressed.status.success());
    assert!(compressed.stdout_raw.len() < data.len());

    let decompressed = run_pgzip(&["-d"], &compressed.stdout_raw).await;
    assert!(decompressed.status.success());
    assert!(decompressed.stdout_raw == data);
});

// Repetitive data should shrink
add_test!(repetitive_data_compresses, async {
    let data = REPETITIVE_DATA.repeat(256);

    let compressed = run_pgzip(&[], data.as_bytes()).await;
    assert!(compressed.status.success());
    assert!(compressed.stdout_raw.len() < data.len());

    let decompressed = run_pgzip(&["-d"], &compressed.stdout_raw).await;
    assert!(decompressed.status.success());
    assert!(decompressed.stdout_raw == data.as_bytes());
});
