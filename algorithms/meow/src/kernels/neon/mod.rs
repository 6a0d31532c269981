//! ARMv8 Crypto Extension Kernel
//!
//! `AESD` applies the key *before* `InvShiftRows`/`InvSubBytes`, so the
//! x86 `AESDEC` ordering is rebuilt as `AESIMC(AESD(lane, 0)) ^ key`.

use crate::kernels::constants::{BLOCK_SIZE, LANE_COUNT, LANE_SIZE};
use crate::kernels::lane::Lane;
use crate::kernels::RoundFunction;
use crate::types::CpuFeatureError;

use core::arch::aarch64::{
    uint8x16_t, vaesdq_u8, vaesimcq_u8, vdupq_n_u8, veorq_u8, vld1q_u8, vst1q_u8,
};

// =============================================================================
// CAPABILITY TOKEN
// =============================================================================

/// ARMv8 AES round function.
///
/// Constructed only after the `aes` feature has been confirmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeonAes {
    _detected: (),
}

impl NeonAes {
    /// Detect the ARMv8 AES extension and return the round function.
    ///
    /// # Errors
    /// Returns `CpuFeatureError` if the CPU lacks the `aes` feature.
    pub fn new() -> Result<Self, CpuFeatureError> {
        #[cfg(feature = "std")]
        let detected = std::arch::is_aarch64_feature_detected!("aes");
        #[cfg(not(feature = "std"))]
        let detected = cfg!(target_feature = "aes");

        if detected {
            Ok(Self { _detected: () })
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "meow::kernels", backend = "ARMv8 AES", "cpu feature missing");
            Err(CpuFeatureError::new("aes"))
        }
    }
}

// =============================================================================
// INTRINSICS
// =============================================================================

// SAFETY: Requires NEON + AES (guaranteed by holding a `NeonAes`).
#[target_feature(enable = "neon,aes")]
#[allow(unsafe_code)]
#[inline]
unsafe fn aesdec(lane: uint8x16_t, key: uint8x16_t) -> uint8x16_t {
    veorq_u8(vaesimcq_u8(vaesdq_u8(lane, vdupq_n_u8(0))), key)
}

// SAFETY: Requires NEON + AES. Loads/stores stay within the 16-byte arrays.
#[target_feature(enable = "neon,aes")]
#[allow(unsafe_code)]
unsafe fn round_arm(lane: &[u8; LANE_SIZE], key: &[u8; LANE_SIZE]) -> [u8; LANE_SIZE] {
    let mut out = [0u8; LANE_SIZE];
    vst1q_u8(
        out.as_mut_ptr(),
        aesdec(vld1q_u8(lane.as_ptr()), vld1q_u8(key.as_ptr())),
    );
    out
}

// SAFETY: Requires NEON + AES. Every load reads 16 bytes at offset
// 0/16/32/48 of a `chunks_exact(64)` block.
#[target_feature(enable = "neon,aes")]
#[allow(unsafe_code)]
unsafe fn absorb_blocks_arm(lanes: &mut [Lane; LANE_COUNT], blocks: &[u8]) {
    let mut s0 = vld1q_u8(lanes[0].as_bytes().as_ptr());
    let mut s1 = vld1q_u8(lanes[1].as_bytes().as_ptr());
    let mut s2 = vld1q_u8(lanes[2].as_bytes().as_ptr());
    let mut s3 = vld1q_u8(lanes[3].as_bytes().as_ptr());

    for block in blocks.chunks_exact(BLOCK_SIZE) {
        let ptr = block.as_ptr();
        let k0 = vld1q_u8(ptr);
        let k1 = vld1q_u8(ptr.add(LANE_SIZE));
        let k2 = vld1q_u8(ptr.add(LANE_SIZE * 2));
        let k3 = vld1q_u8(ptr.add(LANE_SIZE * 3));

        s0 = aesdec(aesdec(s0, k0), k0);
        s1 = aesdec(aesdec(s1, k1), k1);
        s2 = aesdec(aesdec(s2, k2), k2);
        s3 = aesdec(aesdec(s3, k3), k3);
    }

    for (lane, reg) in lanes.iter_mut().zip([s0, s1, s2, s3]) {
        let mut out = [0u8; LANE_SIZE];
        vst1q_u8(out.as_mut_ptr(), reg);
        *lane = Lane::from_bytes(out);
    }
}

// =============================================================================
// IMPLEMENTATION
// =============================================================================

impl RoundFunction for NeonAes {
    const NAME: &'static str = "ARMv8 AES";

    #[inline]
    #[allow(unsafe_code)]
    fn round(self, lane: Lane, key: Lane) -> Lane {
        // SAFETY: `self` proves the AES extension is present.
        Lane::from_bytes(unsafe { round_arm(lane.as_bytes(), key.as_bytes()) })
    }

    #[inline]
    #[allow(unsafe_code)]
    fn absorb_blocks(self, lanes: &mut [Lane; LANE_COUNT], blocks: &[u8]) {
        debug_assert_eq!(blocks.len() % BLOCK_SIZE, 0);
        if blocks.len() < BLOCK_SIZE {
            return;
        }
        // SAFETY: `self` proves the AES extension is present.
        unsafe { absorb_blocks_arm(lanes, blocks) }
    }
}
