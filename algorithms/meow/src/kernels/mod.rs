//! Round-Function Kernels
//!
//! Interchangeable realizations of the single AES decryption round that
//! drives every lane. All of them compute `AESDEC(lane, key)` bit-exactly:
//! `InvMixColumns(InvSubBytes(InvShiftRows(lane))) ^ key`.

#[cfg(target_arch = "x86_64")]
pub mod aesni;
pub mod constants;
pub mod lane;
#[cfg(target_arch = "aarch64")]
pub mod neon;
pub mod portable;

use self::constants::{BLOCK_SIZE, LANE_COUNT, LANE_SIZE};
use self::lane::Lane;

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// One keyed diffusion round over a 128-bit lane.
///
/// Implementors are small `Copy` capability tokens. The streaming engine,
/// the block absorber and the finalization tree are written only against
/// this trait, so swapping the table-driven round for a hardware one never
/// changes a digest.
pub trait RoundFunction: Copy + core::fmt::Debug {
    /// Human-readable backend name.
    const NAME: &'static str;

    /// Apply one round to `lane`, mixing in `key`.
    fn round(self, lane: Lane, key: Lane) -> Lane;

    /// Two stacked rounds with the same key.
    #[inline]
    fn double_round(self, lane: Lane, key: Lane) -> Lane {
        self.round(self.round(lane, key), key)
    }

    /// Keyless diffusion pass applied to a lane before it is used as key
    /// material in the finalization tree.
    #[inline]
    fn finalize_transform(self, lane: Lane) -> Lane {
        self.round(lane, Lane::ZERO)
    }

    /// Absorb every whole 64-byte block of `blocks`: lane `i` takes one
    /// double round keyed by bytes `16 * i..16 * (i + 1)` of each block.
    ///
    /// `blocks.len()` must be a multiple of 64; an empty slice is a no-op.
    #[inline]
    fn absorb_blocks(self, lanes: &mut [Lane; LANE_COUNT], blocks: &[u8]) {
        debug_assert_eq!(blocks.len() % BLOCK_SIZE, 0);
        for block in blocks.chunks_exact(BLOCK_SIZE) {
            for (lane, key) in lanes.iter_mut().zip(block.chunks_exact(LANE_SIZE)) {
                *lane = self.double_round(*lane, Lane::from_slice(key));
            }
        }
    }
}

// =============================================================================
// CAPABILITY REPORTING
// =============================================================================

/// Name of the accelerated round function constructible on this CPU, if any.
///
/// Picking a realization is left to the caller; this only reports what is
/// available.
#[must_use]
pub fn accelerated_backend() -> Option<&'static str> {
    #[cfg(target_arch = "x86_64")]
    {
        if aesni::AesNi::new().is_ok() {
            return Some(<aesni::AesNi as RoundFunction>::NAME);
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        if neon::NeonAes::new().is_ok() {
            return Some(<neon::NeonAes as RoundFunction>::NAME);
        }
    }
    None
}
