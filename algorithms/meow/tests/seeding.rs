//! Integration tests for the seeding functionality.

use meow::{hash, HashState, Hasher};
use rand::prelude::*;
use std::collections::HashSet;

#[test]
fn test_seeding_influence() {
    let data = b"Seed Test Data for Avalanche Check";
    let h1 = hash(0x1234_5678_9ABC_DEF0, 0, data);
    let h2 = hash(0x1234_5678_9ABC_DEF1, 0, data);
    let h3 = hash(0x1234_5678_9ABC_DEF0, 1, data);

    assert_ne!(h1, h2, "seed1 must influence the digest");
    assert_ne!(h1, h3, "seed2 must influence the digest");
}

#[test]
fn test_random_seeds_do_not_collapse() {
    let data = b"Seed sweep over random pairs";
    let base = hash(0, 0, data);
    let mut rng = rand::rng();
    let mut seen = HashSet::new();
    seen.insert(base);

    for _ in 0..512 {
        let mut raw = [0u8; 16];
        rng.fill(&mut raw[..]);
        let mut s1 = [0u8; 8];
        let mut s2 = [0u8; 8];
        s1.copy_from_slice(&raw[..8]);
        s2.copy_from_slice(&raw[8..]);
        let (seed1, seed2) = (u64::from_le_bytes(s1), u64::from_le_bytes(s2));
        if seed1 == 0 && seed2 == 0 {
            continue;
        }

        let digest = hash(seed1, seed2, data);
        assert_ne!(
            digest, base,
            "seeds ({seed1:#x}, {seed2:#x}) collide with the unseeded digest"
        );
        assert!(
            seen.insert(digest),
            "seeds ({seed1:#x}, {seed2:#x}) repeat an earlier digest"
        );
    }
}

#[test]
fn test_seed_halves_are_not_interchangeable() {
    let data = b"Order Matters";
    assert_ne!(hash(1, 2, data), hash(2, 1, data));
}

#[test]
fn test_extreme_seeds_wrap() {
    // seed2 + len + 1 and seed1 - len both wrap without panicking.
    let data: Vec<u8> = (0..100u8).collect();
    let digest = hash(u64::MAX, u64::MAX, &data);
    assert_eq!(digest.to_string(), "f3547e993430d913d641d335aea00a05");
    let _ = hash(0, u64::MAX, &data);
}

#[test]
fn test_end_seeds_must_match_begin() {
    let data = b"Mismatched seeds";
    let mut state = HashState::begin(1, 2, data.len() as u64);
    state.absorb(data);
    assert_ne!(state.end(3, 4), hash(1, 2, data));
}

#[test]
fn test_streaming_seeding() {
    let data = b"Streaming Seed Test";

    let mut hasher1 = Hasher::with_seeds(0, 1);
    hasher1.update(data);
    let h1 = hasher1.finalize();

    let mut hasher2 = Hasher::with_seeds(0, 2);
    hasher2.update(data);
    let h2 = hasher2.finalize();

    assert_ne!(
        h1, h2,
        "Different seeds in streaming mode must produce different outputs"
    );
}

#[test]
fn test_verify_respects_seeds() {
    let data = b"integrity";
    let digest = hash(10, 20, data);
    assert!(meow::verify(10, 20, data, &digest));
    assert!(!meow::verify(10, 21, data, &digest));
    assert!(!meow::verify(10, 20, b"integritY", &digest));
}
