//! Shared types used across the Meow library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::HASH_SIZE;

// =============================================================================
// DIGEST
// =============================================================================

/// 128-bit Meow digest.
///
/// Sixteen bytes, or equivalently four little-endian 32-bit words. Formats
/// as 32 lowercase hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Digest128([u8; HASH_SIZE]);

impl Digest128 {
    /// Wrap raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build from four 32-bit words, word 0 first.
    #[must_use]
    pub fn from_words(words: [u32; 4]) -> Self {
        let mut bytes = [0u8; HASH_SIZE];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self(bytes)
    }

    /// Digest bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; HASH_SIZE] {
        self.0
    }

    /// Borrow the digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Digest as four little-endian 32-bit words.
    #[must_use]
    pub fn to_words(self) -> [u32; 4] {
        core::array::from_fn(|i| {
            u32::from_le_bytes([
                self.0[i * 4],
                self.0[i * 4 + 1],
                self.0[i * 4 + 2],
                self.0[i * 4 + 3],
            ])
        })
    }
}

impl From<[u8; HASH_SIZE]> for Digest128 {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Digest128> for [u8; HASH_SIZE] {
    fn from(digest: Digest128) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest128 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Digest128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest128({self:x})")
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for an accelerated round function the CPU cannot run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatureError {
    missing: &'static str,
}

impl CpuFeatureError {
    /// Create a new `CpuFeatureError` describing the missing CPU feature.
    pub const fn new(missing: &'static str) -> Self {
        Self { missing }
    }

    /// Name of the missing CPU feature.
    pub const fn missing(&self) -> &'static str {
        self.missing
    }
}

impl fmt::Display for CpuFeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU feature '{}' required for the accelerated Meow round; \
             use the portable round function instead",
            self.missing
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for CpuFeatureError {}
