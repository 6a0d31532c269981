//! 128-bit lane value shared by every round-function realization.

use core::ops::{BitXor, BitXorAssign};

use crate::kernels::constants::LANE_SIZE;

/// One 128-bit accumulator (or round key), stored as little-endian bytes.
///
/// Byte order matches a 16-byte SIMD register loaded from memory, so the
/// table-driven and instruction-based rounds see identical values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C, align(16))]
pub struct Lane {
    b: [u8; LANE_SIZE],
}

impl Lane {
    /// All-zero lane.
    pub const ZERO: Self = Self { b: [0; LANE_SIZE] };

    /// Wrap raw bytes.
    #[must_use]
    pub const fn from_bytes(b: [u8; LANE_SIZE]) -> Self {
        Self { b }
    }

    /// Copy the first 16 bytes of `bytes`.
    ///
    /// # Panics
    /// If `bytes` is shorter than 16 bytes.
    #[must_use]
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut b = [0u8; LANE_SIZE];
        b.copy_from_slice(&bytes[..LANE_SIZE]);
        Self { b }
    }

    /// Build from two 64-bit halves, low half first.
    #[must_use]
    pub const fn from_u64s(lo: u64, hi: u64) -> Self {
        let l = lo.to_le_bytes();
        let h = hi.to_le_bytes();
        let mut b = [0u8; LANE_SIZE];
        let mut i = 0;
        while i < 8 {
            b[i] = l[i];
            b[i + 8] = h[i];
            i += 1;
        }
        Self { b }
    }

    /// Build from four little-endian 32-bit words.
    #[must_use]
    #[inline]
    pub fn from_words(w: [u32; 4]) -> Self {
        let mut b = [0u8; LANE_SIZE];
        for (chunk, word) in b.chunks_exact_mut(4).zip(w) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self { b }
    }

    /// Raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; LANE_SIZE] {
        self.b
    }

    /// Borrow the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; LANE_SIZE] {
        &self.b
    }

    /// Split into four little-endian 32-bit words.
    #[must_use]
    #[inline]
    pub const fn to_words(self) -> [u32; 4] {
        let b = self.b;
        [
            u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            u32::from_le_bytes([b[4], b[5], b[6], b[7]]),
            u32::from_le_bytes([b[8], b[9], b[10], b[11]]),
            u32::from_le_bytes([b[12], b[13], b[14], b[15]]),
        ]
    }
}

impl BitXor for Lane {
    type Output = Self;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self {
        self ^= rhs;
        self
    }
}

impl BitXorAssign for Lane {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        for (a, b) in self.b.iter_mut().zip(rhs.b) {
            *a ^= b;
        }
    }
}
