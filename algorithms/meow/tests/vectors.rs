//! Regression Vectors for Meow
//!
//! Pins the one-shot and streaming digests to the recorded JSON vectors, so
//! any change to the output is caught.

#![allow(clippy::expect_used)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::unwrap_used)]

use meow::HashState;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct Vector {
    hash: String,
    input: String,
    name: String,
    seed1: u64,
    seed2: u64,
}

#[derive(Deserialize)]
struct TestVectors {
    vectors: Vec<Vector>,
}

/// `RAMP_<n>` expands to the bytes `0, 1, 2, ..` (mod 256) of length `n`.
fn decode_input(input: &str) -> Vec<u8> {
    input.strip_prefix("RAMP_").map_or_else(
        || input.as_bytes().to_vec(),
        |n| {
            let n: usize = n.parse().expect("bad RAMP length");
            (0..n).map(|i| (i & 0xFF) as u8).collect()
        },
    )
}

fn load() -> TestVectors {
    let file = File::open("tests/test_vectors.json").expect("Failed to open test_vectors.json");
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).expect("Failed to parse JSON")
}

#[test]
fn test_regression_vectors() {
    println!("\n=== Verifying Regression Vectors ===");

    for vector in load().vectors {
        let input = decode_input(&vector.input);
        let digest = meow::hash(vector.seed1, vector.seed2, &input);
        let hex_hash = hex::encode(digest);

        assert_eq!(hex_hash, vector.hash, "Vector Mismatched: {}", vector.name);
        println!("✅ {:<16} | {}", vector.name, hex_hash);
    }
    println!("===================================\n");
}

#[test]
fn test_regression_vectors_streaming() {
    for vector in load().vectors {
        let input = decode_input(&vector.input);
        let mut state = HashState::begin(vector.seed1, vector.seed2, input.len() as u64);
        for chunk in input.chunks(7) {
            state.absorb(chunk);
        }
        let digest = state.end(vector.seed1, vector.seed2);

        assert_eq!(digest.to_string(), vector.hash, "Streaming mismatch: {}", vector.name);
    }
}
