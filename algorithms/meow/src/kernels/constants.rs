//! Meow Kernel Constants
//!
//! Lane initialisers, block geometry and the two 32-byte byte tables used
//! by the page-safe tail load.

// =============================================================================
// GEOMETRY
// =============================================================================

/// Width of one lane (and of one round key) in bytes.
pub const LANE_SIZE: usize = 16;

/// Number of independent lanes in the hash state.
pub const LANE_COUNT: usize = 4;

/// Bytes consumed per block: one 16-byte key for each lane.
pub const BLOCK_SIZE: usize = LANE_SIZE * LANE_COUNT;

/// Digest width in bytes.
pub const HASH_SIZE: usize = 16;

// =============================================================================
// LANE INITIALISERS
// =============================================================================

/// Public starting values of S0..S3: the byte ramp `0..64`, one 16-byte
/// slice per lane.
#[allow(clippy::cast_possible_truncation)]
pub const LANE_INIT: [[u8; LANE_SIZE]; LANE_COUNT] = {
    let mut init = [[0u8; LANE_SIZE]; LANE_COUNT];
    let mut lane = 0;
    while lane < LANE_COUNT {
        let mut i = 0;
        while i < LANE_SIZE {
            init[lane][i] = (lane * LANE_SIZE + i) as u8;
            i += 1;
        }
        lane += 1;
    }
    init
};

// =============================================================================
// TAIL TABLES
// =============================================================================

/// Length mask source: 16 bytes of `0xFF` followed by 16 zero bytes.
///
/// The 16-byte window starting at `16 - n` keeps exactly the first `n`
/// bytes of a lane.
pub const MASK_LEN: [u8; 2 * LANE_SIZE] = {
    let mut mask = [0u8; 2 * LANE_SIZE];
    let mut i = 0;
    while i < LANE_SIZE {
        mask[i] = 0xFF;
        i += 1;
    }
    mask
};

/// Byte-shuffle source: indices `0..16` followed by 16 "zero this byte"
/// markers (high bit set).
///
/// The 16-byte window starting at `a` moves byte `a + i` of an aligned
/// load down to position `i`.
#[allow(clippy::cast_possible_truncation)]
pub const SHIFT_ADJUST: [u8; 2 * LANE_SIZE] = {
    let mut shuffle = [0x80u8; 2 * LANE_SIZE];
    let mut i = 0;
    while i < LANE_SIZE {
        shuffle[i] = i as u8;
        i += 1;
    }
    shuffle
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_init_is_byte_ramp() {
        for (lane, init) in LANE_INIT.iter().enumerate() {
            for (i, byte) in init.iter().enumerate() {
                assert_eq!(usize::from(*byte), lane * LANE_SIZE + i);
            }
        }
    }

    #[test]
    fn test_shift_adjust_layout() {
        for (i, idx) in SHIFT_ADJUST.iter().enumerate() {
            let expected = if i < LANE_SIZE { i } else { 0x80 };
            assert_eq!(usize::from(*idx), expected, "index {i}");
        }
    }
}
