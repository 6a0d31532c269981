//! Public API Layer
//!
use crate::kernels::portable;
use crate::types::Digest128;
use subtle::ConstantTimeEq;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the Meow hash of `input` in one call.
///
/// Runs the table-driven round on every platform; the result is the
/// reference every streaming or accelerated path must reproduce.
///
/// # Example
/// ```rust
/// let digest = meow::hash(0, 0, b"meow");
/// assert_eq!(digest.to_string(), "36109b2efa4e8784c794212e05c0a465");
/// ```
#[must_use]
#[inline]
pub fn hash(seed1: u64, seed2: u64, input: &[u8]) -> Digest128 {
    portable::oneshot(seed1, seed2, input)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Check `input` against a known digest in constant time.
///
/// Meow is not a cryptographic hash; this guards integrity checks against
/// timing side channels, not against forgery.
///
/// # Example
/// ```rust
/// let data = b"payload";
/// let digest = meow::hash(1, 2, data);
/// assert!(meow::verify(1, 2, data, &digest));
/// assert!(!meow::verify(1, 3, data, &digest));
/// ```
#[must_use]
pub fn verify(seed1: u64, seed2: u64, input: &[u8], expected: &Digest128) -> bool {
    let computed = hash(seed1, seed2, input);
    computed.as_bytes()[..].ct_eq(&expected.as_bytes()[..]).into()
}
