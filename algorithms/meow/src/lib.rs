#![cfg_attr(not(feature = "std"), no_std)]

//! # Meow
//!
//! Streaming 128-bit Meow hash. Four 128-bit lanes absorb 64-byte blocks
//! through AES decryption rounds, a page-safe tail load picks up the last
//! partial block, and a cross-lane tree folds the lanes into the digest.
//!
//! Not a cryptographic hash: use it for checksums, fingerprints and
//! content addressing.

//! # Usage
//! ```rust
//! use meow::{HashState, Hasher};
//!
//! // 1. One-shot
//! let digest = meow::hash(0, 0, b"meow");
//!
//! // 2. Streaming, announcing the final length up front
//! let mut state = HashState::begin(0, 0, 4);
//! state.absorb(b"me");
//! state.absorb(b"ow");
//! assert_eq!(state.end(0, 0), digest);
//!
//! // 3. Seeded hasher that remembers its seeds
//! let mut hasher = Hasher::with_length(0, 0, 4);
//! hasher.update(b"meow");
//! assert_eq!(hasher.finalize(), digest);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod engine;
#[doc(hidden)]
pub mod kernels; // Realizations are public for cross-checking and fuzzing
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use engine::page::PAGE_SIZE;
#[cfg(target_arch = "x86_64")]
pub use kernels::aesni::AesNi;
pub use kernels::lane::Lane;
#[cfg(target_arch = "aarch64")]
pub use kernels::neon::NeonAes;
pub use kernels::portable::Portable;
pub use kernels::{accelerated_backend, RoundFunction};
pub use oneshot::{hash, verify};
pub use streaming::HashState;
pub use streaming::MeowHasher as Hasher;
pub use types::{CpuFeatureError, Digest128};
