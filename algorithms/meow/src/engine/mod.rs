//! Execution Engine
//!
//! Lane initialisation, the page-safe tail load and the finalization tree
//! shared by every round-function realization.

pub mod finalize;
pub mod page;

use crate::kernels::constants::{LANE_COUNT, LANE_INIT};
use crate::kernels::lane::Lane;

/// Seed/length mixer: `(seed1 - len, seed2 + len + 1)` as the low and high
/// halves of one 128-bit value, wrapping.
#[must_use]
#[inline]
pub const fn mixer(seed1: u64, seed2: u64, len: u64) -> Lane {
    Lane::from_u64s(
        seed1.wrapping_sub(len),
        seed2.wrapping_add(len).wrapping_add(1),
    )
}

/// Public lane constants, each XOR the mixer for `len`.
#[must_use]
#[inline]
pub fn init_lanes(seed1: u64, seed2: u64, len: u64) -> [Lane; LANE_COUNT] {
    let mix = mixer(seed1, seed2, len);
    LANE_INIT.map(|init| Lane::from_bytes(init) ^ mix)
}
