//! Benchmarks for the classical cipher operations.
//!
//! Measures keyed construction, encode/decode throughput for a fixed
//! message, and throughput scaling of the polyalphabetic and transposition
//! ciphers across message lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use classical_ciphers::{
    AffineCipher, BaconianCipher, BifidCipher, Cipher, ColumnarTranspositionCipher, MorseCode,
    PlayfairCipher, RailFenceCipher, RunningKeyCipher, VigenereCipher,
};

/// Keyword used consistently across all keyed benchmarks.
const BENCH_KEYWORD: &str = "BenchmarkKeyword";

/// Message used for the fixed-size benchmarks.
const BENCH_MESSAGE: &str = "The quick brown fox jumps over the lazy dog, attack at dawn!";

/// Builds a message of `len` characters by repeating [`BENCH_MESSAGE`].
fn message_of_length(len: usize) -> String {
    BENCH_MESSAGE.chars().cycle().take(len).collect()
}

/// Benchmarks keyed construction.
///
/// Bifid and Playfair build a Polybius square with its reverse map; the
/// Running Key cipher stretches several keywords to their common multiple.
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("bifid", |b| {
        b.iter(|| BifidCipher::new(black_box(BENCH_KEYWORD)).unwrap());
    });
    group.bench_function("playfair", |b| {
        b.iter(|| PlayfairCipher::new(black_box(BENCH_KEYWORD)).unwrap());
    });
    group.bench_function("running_key", |b| {
        let keywords = ["cats", "are", "cuter", "than", "dogs"];
        b.iter(|| RunningKeyCipher::new(black_box(&keywords[..]), None).unwrap());
    });

    group.finish();
}

/// Benchmarks encode then decode of [`BENCH_MESSAGE`] for each cipher.
fn bench_roundtrip(c: &mut Criterion) {
    let ciphers: Vec<(&str, Box<dyn Cipher>)> = vec![
        ("affine", Box::new(AffineCipher::new(5, 8, false).unwrap())),
        ("vigenere", Box::new(VigenereCipher::new(BENCH_KEYWORD).unwrap())),
        ("bifid", Box::new(BifidCipher::new(BENCH_KEYWORD).unwrap())),
        ("playfair", Box::new(PlayfairCipher::new(BENCH_KEYWORD).unwrap())),
        ("columnar", Box::new(ColumnarTranspositionCipher::new(BENCH_KEYWORD).unwrap())),
        ("rail_fence", Box::new(RailFenceCipher::new(4).unwrap())),
        ("baconian", Box::new(BaconianCipher::default())),
        ("morse", Box::new(MorseCode)),
    ];

    let mut group = c.benchmark_group("roundtrip");
    group.throughput(Throughput::Bytes(BENCH_MESSAGE.len() as u64));

    for (name, cipher) in &ciphers {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let encoded = cipher.encode(black_box(BENCH_MESSAGE)).unwrap();
                cipher.decode(&encoded).unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmarks `encode()` throughput across message lengths.
///
/// Compares a per-character cipher (Vigenère) with a whole-message
/// rearrangement (Columnar) and a fractionating cipher (Bifid).
fn bench_encode_scaling(c: &mut Criterion) {
    let lengths: &[usize] = &[64, 1024, 16384];
    let ciphers: Vec<(&str, Box<dyn Cipher>)> = vec![
        ("vigenere", Box::new(VigenereCipher::new(BENCH_KEYWORD).unwrap())),
        ("columnar", Box::new(ColumnarTranspositionCipher::new(BENCH_KEYWORD).unwrap())),
        ("bifid", Box::new(BifidCipher::new(BENCH_KEYWORD).unwrap())),
    ];

    for (name, cipher) in &ciphers {
        let mut group = c.benchmark_group(format!("encode_scaling/{name}"));
        for &len in lengths {
            let message = message_of_length(len);
            group.throughput(Throughput::Bytes(len as u64));
            group.bench_with_input(BenchmarkId::from_parameter(len), &message, |b, message| {
                b.iter(|| cipher.encode(black_box(message)).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_construction, bench_roundtrip, bench_encode_scaling,);
criterion_main!(benches);
