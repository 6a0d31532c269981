//! Portable implementation of Meow.
//!
//! Table-driven AES decryption round plus a self-contained one-shot hash
//! built only from it. The one-shot path copies the final fragment into a
//! zero-padded stack buffer, so it never reads past the caller's slice and
//! serves as the oracle for the streaming engine.

use self::tables::{TD0, TD1, TD2, TD3};
use crate::kernels::constants::{BLOCK_SIZE, LANE_INIT, LANE_SIZE};
use crate::kernels::lane::Lane;
use crate::kernels::RoundFunction;
use crate::types::Digest128;

mod tables;

// =============================================================================
// ROUND FUNCTION
// =============================================================================

/// Table-driven round: four lookups per output word, one per table.
///
/// Always available and `const`-constructible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Portable;

impl RoundFunction for Portable {
    const NAME: &'static str = "Portable";

    #[inline]
    fn round(self, lane: Lane, key: Lane) -> Lane {
        let [s0, s1, s2, s3] = lane.to_words();
        let k = key.to_words();

        // Output word i takes row r from input word (i + 4 - r) % 4 (InvShiftRows).
        let column = |a: u32, b: u32, c: u32, d: u32| {
            TD0[(a & 0xFF) as usize]
                ^ TD1[(b >> 24) as usize]
                ^ TD2[((c >> 16) & 0xFF) as usize]
                ^ TD3[((d >> 8) & 0xFF) as usize]
        };

        Lane::from_words([
            column(s0, s1, s2, s3) ^ k[0],
            column(s1, s2, s3, s0) ^ k[1],
            column(s2, s3, s0, s1) ^ k[2],
            column(s3, s0, s1, s2) ^ k[3],
        ])
    }
}

// =============================================================================
// REFERENCE ONE-SHOT
// =============================================================================

/// Hash `input` in one call with the table-driven round.
///
/// Equal to `HashState::begin(seed1, seed2, input.len())`, any sequence of
/// `absorb` calls covering `input`, then `end(seed1, seed2)`.
#[must_use]
pub fn oneshot(seed1: u64, seed2: u64, input: &[u8]) -> Digest128 {
    let r = Portable;
    let total_len = input.len() as u64;
    let mixer = Lane::from_u64s(
        seed1.wrapping_sub(total_len),
        seed2.wrapping_add(total_len).wrapping_add(1),
    );

    let mut s = LANE_INIT.map(|init| Lane::from_bytes(init) ^ mixer);

    let mut blocks = input.chunks_exact(BLOCK_SIZE);
    for block in &mut blocks {
        for (lane, key) in s.iter_mut().zip(block.chunks_exact(LANE_SIZE)) {
            *lane = r.double_round(*lane, Lane::from_slice(key));
        }
    }

    // Whole trailing lanes go to S0..S2, the sub-16 fragment to S3.
    let rem = blocks.remainder();
    let mut lanes = rem.chunks_exact(LANE_SIZE);
    for (lane, key) in s.iter_mut().zip(&mut lanes) {
        *lane = r.round(*lane, Lane::from_slice(key));
    }
    let fragment = lanes.remainder();
    if !fragment.is_empty() {
        let mut padded = [0u8; LANE_SIZE];
        padded[..fragment.len()].copy_from_slice(fragment);
        s[3] = r.round(s[3], Lane::from_bytes(padded));
    }

    let [mut s0, mut s1, mut s2, mut s3] = s;

    s3 = r.round(s3, mixer);
    s2 = r.round(s2, mixer);
    s1 = r.round(s1, mixer);
    s0 = r.round(s0, mixer);

    s2 = r.round(s2, r.finalize_transform(s3));
    s0 = r.round(s0, r.finalize_transform(s1));
    s2 = r.round(s2, mixer);
    s0 = r.round(s0, r.finalize_transform(s2));
    s0 = r.round(s0, mixer);

    Digest128::from_bytes(s0.to_bytes())
}
