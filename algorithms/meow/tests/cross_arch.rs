//! Cross-Architecture Consistency Tests
//!
//! Verifies that the AES-NI / ARMv8 AES round functions and the Portable
//! table-driven round produce IDENTICAL digests, so the choice of
//! realization never alters the output.
//!
//! Coverage:
//! - Single rounds on random lanes and keys
//! - Block absorption
//! - Full streaming hashes on fixed scenarios and random corpora

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::uninlined_format_args)]

use meow::{HashState, Lane, Portable, RoundFunction};
use rand::prelude::*;

fn scenarios() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("Empty", vec![]),
        ("Small", b"meow".to_vec()),
        ("Fragment (15)", vec![0xA5u8; 15]),
        ("Exact Lane (16)", vec![1u8; 16]),
        ("Three Lanes + Fragment (63)", vec![2u8; 63]),
        ("Exact Block (64)", vec![0u8; 64]),
        ("Unaligned (513)", vec![3u8; 513]),
        ("Large (4096)", vec![b'c'; 4096]),
        ("Prime Length (101)", vec![0u8; 101]),
    ]
}

fn streamed<R: RoundFunction>(round: R, seed1: u64, seed2: u64, input: &[u8]) -> meow::Digest128 {
    let mut state = HashState::begin_with(round, seed1, seed2, input.len() as u64);
    for chunk in input.chunks(29) {
        state.absorb(chunk);
    }
    state.end(seed1, seed2)
}

fn random_lane(rng: &mut impl Rng) -> Lane {
    let mut b = [0u8; 16];
    rng.fill(&mut b[..]);
    Lane::from_bytes(b)
}

fn check_backend<R: RoundFunction>(round: R) {
    let mut rng = rand::rng();

    // 1. Single rounds
    for _ in 0..1000 {
        let lane = random_lane(&mut rng);
        let key = random_lane(&mut rng);
        assert_eq!(
            round.round(lane, key),
            Portable.round(lane, key),
            "{} round mismatch",
            R::NAME
        );
    }

    // 2. Block absorption
    let mut blocks = vec![0u8; 64 * 9];
    rng.fill(&mut blocks[..]);
    let init = meow::engine::init_lanes(3, 4, blocks.len() as u64);
    let mut expected = init;
    let mut actual = init;
    Portable.absorb_blocks(&mut expected, &blocks);
    round.absorb_blocks(&mut actual, &blocks);
    assert_eq!(actual, expected, "{} absorb_blocks mismatch", R::NAME);

    // 3. Fixed scenarios, seeded and unseeded
    for (name, input) in scenarios() {
        for (s1, s2) in [(0, 0), (0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210)] {
            assert_eq!(
                streamed(round, s1, s2, &input),
                meow::hash(s1, s2, &input),
                "{} mismatch: {}",
                R::NAME,
                name
            );
        }
    }

    // 4. Random corpus
    for _ in 0..200 {
        let mut len_bytes = [0u8; 2];
        rng.fill(&mut len_bytes[..]);
        let len = usize::from(u16::from_le_bytes(len_bytes)) % 2048;
        let mut input = vec![0u8; len];
        rng.fill(&mut input[..]);
        assert_eq!(
            streamed(round, 9, 10, &input),
            meow::hash(9, 10, &input),
            "{} mismatch on random input len={}",
            R::NAME,
            len
        );
    }
}

// =============================================================================
// PORTABLE SELF-CHECK
// =============================================================================

#[test]
fn test_portable_streaming_matches_reference() {
    check_backend(Portable);
}

// =============================================================================
// HARDWARE REALIZATIONS
// =============================================================================

#[cfg(target_arch = "x86_64")]
#[test]
fn test_aesni_matches_portable() {
    let Ok(aesni) = meow::AesNi::new() else {
        println!("Skipping: AES-NI not supported.");
        return;
    };
    check_backend(aesni);
}

#[cfg(target_arch = "aarch64")]
#[test]
fn test_neon_matches_portable() {
    let Ok(neon) = meow::NeonAes::new() else {
        println!("Skipping: ARMv8 AES not supported.");
        return;
    };
    check_backend(neon);
}

#[test]
fn test_accelerated_backend_is_constructible() {
    match meow::accelerated_backend() {
        #[cfg(target_arch = "x86_64")]
        Some(name) => {
            assert_eq!(name, <meow::AesNi as RoundFunction>::NAME);
            assert!(meow::AesNi::new().is_ok());
        }
        #[cfg(target_arch = "aarch64")]
        Some(name) => {
            assert_eq!(name, <meow::NeonAes as RoundFunction>::NAME);
            assert!(meow::NeonAes::new().is_ok());
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        Some(name) => panic!("unexpected backend {name}"),
        None => println!("No accelerated round function on this CPU."),
    }
}
