//! Seed mixing and the cross-lane finalization tree.

use super::mixer;
use crate::kernels::constants::LANE_COUNT;
use crate::kernels::lane::Lane;
use crate::kernels::RoundFunction;

/// Fold four lanes into the digest lane.
///
/// `total_len` must be the number of bytes actually absorbed, not any
/// length announced up front.
#[must_use]
pub fn fold<R: RoundFunction>(
    r: R,
    lanes: [Lane; LANE_COUNT],
    seed1: u64,
    seed2: u64,
    total_len: u64,
) -> Lane {
    let mix = mixer(seed1, seed2, total_len);
    let [mut s0, mut s1, mut s2, mut s3] = lanes;

    // 1. Seed mixing, S3 down to S0
    s3 = r.round(s3, mix);
    s2 = r.round(s2, mix);
    s1 = r.round(s1, mix);
    s0 = r.round(s0, mix);

    // 2. Cross-lane tree
    s2 = r.round(s2, r.finalize_transform(s3));
    s0 = r.round(s0, r.finalize_transform(s1));
    s2 = r.round(s2, mix);
    s0 = r.round(s0, r.finalize_transform(s2));
    r.round(s0, mix)
}
