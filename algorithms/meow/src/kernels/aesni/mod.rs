//! AES-NI Kernel Module
//!
//! `AESDEC` in a single instruction. The block absorber keeps all four
//! lanes in registers for the whole run of blocks.

#![allow(clippy::similar_names)]

use crate::kernels::constants::{BLOCK_SIZE, LANE_COUNT, LANE_SIZE};
use crate::kernels::lane::Lane;
use crate::kernels::RoundFunction;
use crate::types::CpuFeatureError;

use core::arch::x86_64::{
    __m128i, _mm_aesdec_si128, _mm_loadu_si128, _mm_setzero_si128, _mm_storeu_si128,
};

// =============================================================================
// CAPABILITY TOKEN
// =============================================================================

/// AES-NI round function.
///
/// A value of this type only exists once the `aes` CPU feature has been
/// confirmed, which is what makes its methods safe to call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AesNi {
    _detected: (),
}

impl AesNi {
    /// Detect AES-NI and return the round function.
    ///
    /// # Errors
    /// Returns `CpuFeatureError` if the CPU lacks the `aes` feature.
    pub fn new() -> Result<Self, CpuFeatureError> {
        #[cfg(feature = "std")]
        let detected = is_x86_feature_detected!("aes");
        #[cfg(not(feature = "std"))]
        let detected = cfg!(target_feature = "aes");

        if detected {
            Ok(Self { _detected: () })
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "meow::kernels", backend = "AES-NI", "cpu feature missing");
            Err(CpuFeatureError::new("aes"))
        }
    }
}

// =============================================================================
// INTRINSICS
// =============================================================================

// SAFETY: Requires AES (guaranteed by holding an `AesNi`). Loads/stores are
// unaligned and stay within the 16-byte arrays passed in.
#[target_feature(enable = "aes")]
#[allow(unsafe_code)]
unsafe fn round_x86(lane: &[u8; LANE_SIZE], key: &[u8; LANE_SIZE]) -> [u8; LANE_SIZE] {
    let s = _mm_loadu_si128(lane.as_ptr().cast());
    let k = _mm_loadu_si128(key.as_ptr().cast());
    let mut out = [0u8; LANE_SIZE];
    _mm_storeu_si128(out.as_mut_ptr().cast(), _mm_aesdec_si128(s, k));
    out
}

// SAFETY: Requires AES (guaranteed by holding an `AesNi`). Every load reads
// 16 bytes at offset 0/16/32/48 of a `chunks_exact(64)` block.
#[target_feature(enable = "aes")]
#[allow(unsafe_code)]
unsafe fn absorb_blocks_x86(lanes: &mut [Lane; LANE_COUNT], blocks: &[u8]) {
    let mut regs: [__m128i; LANE_COUNT] = [_mm_setzero_si128(); LANE_COUNT];
    for (reg, lane) in regs.iter_mut().zip(lanes.iter()) {
        *reg = _mm_loadu_si128(lane.as_bytes().as_ptr().cast());
    }
    let [mut s0, mut s1, mut s2, mut s3] = regs;

    for block in blocks.chunks_exact(BLOCK_SIZE) {
        let ptr = block.as_ptr();
        let k0 = _mm_loadu_si128(ptr.cast());
        let k1 = _mm_loadu_si128(ptr.add(LANE_SIZE).cast());
        let k2 = _mm_loadu_si128(ptr.add(LANE_SIZE * 2).cast());
        let k3 = _mm_loadu_si128(ptr.add(LANE_SIZE * 3).cast());

        s0 = _mm_aesdec_si128(_mm_aesdec_si128(s0, k0), k0);
        s1 = _mm_aesdec_si128(_mm_aesdec_si128(s1, k1), k1);
        s2 = _mm_aesdec_si128(_mm_aesdec_si128(s2, k2), k2);
        s3 = _mm_aesdec_si128(_mm_aesdec_si128(s3, k3), k3);
    }

    for (lane, reg) in lanes.iter_mut().zip([s0, s1, s2, s3]) {
        let mut out = [0u8; LANE_SIZE];
        _mm_storeu_si128(out.as_mut_ptr().cast(), reg);
        *lane = Lane::from_bytes(out);
    }
}

// =============================================================================
// IMPLEMENTATION
// =============================================================================

impl RoundFunction for AesNi {
    const NAME: &'static str = "AES-NI";

    #[inline]
    #[allow(unsafe_code)]
    fn round(self, lane: Lane, key: Lane) -> Lane {
        // SAFETY: `self` proves AES-NI is present.
        Lane::from_bytes(unsafe { round_x86(lane.as_bytes(), key.as_bytes()) })
    }

    #[inline]
    #[allow(unsafe_code)]
    fn absorb_blocks(self, lanes: &mut [Lane; LANE_COUNT], blocks: &[u8]) {
        debug_assert_eq!(blocks.len() % BLOCK_SIZE, 0);
        if blocks.len() < BLOCK_SIZE {
            return;
        }
        // SAFETY: `self` proves AES-NI is present.
        unsafe { absorb_blocks_x86(lanes, blocks) }
    }
}

#[cfg(test)]
#[allow(clippy::cast_possible_truncation)]
mod tests {
    use super::*;
    use crate::kernels::portable::Portable;

    #[test]
    fn test_round_matches_table_driven() {
        let Ok(aesni) = AesNi::new() else {
            println!("Skipping: AES-NI not supported.");
            return;
        };
        for seed in 0u8..64 {
            let lane = Lane::from_bytes(core::array::from_fn(|i| seed.wrapping_mul(31) ^ i as u8));
            let key = Lane::from_bytes(core::array::from_fn(|i| seed.wrapping_add(i as u8 * 17)));
            assert_eq!(aesni.round(lane, key), Portable.round(lane, key), "seed {seed}");
        }
    }

    #[test]
    fn test_absorb_blocks_matches_table_driven() {
        let Ok(aesni) = AesNi::new() else {
            return;
        };
        let data: [u8; 256] = core::array::from_fn(|i| (i as u8).wrapping_mul(151));
        let mut fast = [Lane::from_u64s(1, 2); LANE_COUNT];
        let mut slow = fast;
        aesni.absorb_blocks(&mut fast, &data);
        Portable.absorb_blocks(&mut slow, &data);
        assert_eq!(fast, slow);
    }
}
