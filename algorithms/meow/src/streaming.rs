//! Streaming Hasher
//!
//! `HashState` is the begin/absorb/end state machine over four lanes and a
//! 64-byte residual buffer. `MeowHasher` wraps it with the seeds so it can
//! be reset and plugged into the `digest` traits.

use crate::engine::{finalize, init_lanes, page};
use crate::kernels::constants::{BLOCK_SIZE, LANE_COUNT, LANE_SIZE};
use crate::kernels::lane::Lane;
use crate::kernels::portable::Portable;
use crate::kernels::RoundFunction;
use crate::types::Digest128;

#[cfg(feature = "digest-trait")]
use crypto_common::{Key, KeySizeUser};
#[cfg(feature = "digest-trait")]
use digest::typenum::U16;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, KeyInit, OutputSizeUser, Reset, Update};

// =============================================================================
// HASH STATE
// =============================================================================

/// Residual bytes awaiting a full block. 16-byte alignment keeps every
/// tail fragment on an aligned, in-buffer window.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
struct Residual([u8; BLOCK_SIZE]);

/// Incremental Meow state.
///
/// Feeding the same bytes through any sequence of [`absorb`](Self::absorb)
/// calls yields the same digest. Reusing a state after
/// [`end`](Self::end) is impossible: `end` consumes it.
#[derive(Clone, Debug)]
pub struct HashState<R: RoundFunction = Portable> {
    round: R,
    lanes: [Lane; LANE_COUNT],
    /// Always < `BLOCK_SIZE` bytes between calls
    buffer: Residual,
    buffer_len: usize,
    /// Bytes absorbed since `begin`
    total_len: u64,
}

impl HashState<Portable> {
    /// Start a stream with the table-driven round.
    ///
    /// `anticipated_len` only keys the initial lanes; the true absorbed
    /// length is tracked separately and is what [`end`](Self::end) mixes in.
    #[must_use]
    pub fn begin(seed1: u64, seed2: u64, anticipated_len: u64) -> Self {
        Self::begin_with(Portable, seed1, seed2, anticipated_len)
    }
}

impl<R: RoundFunction> HashState<R> {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Start a stream driven by the given round function.
    #[must_use]
    pub fn begin_with(round: R, seed1: u64, seed2: u64, anticipated_len: u64) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "meow::stream",
            backend = R::NAME,
            anticipated_len,
            "begin"
        );

        Self {
            round,
            lanes: init_lanes(seed1, seed2, anticipated_len),
            buffer: Residual([0u8; BLOCK_SIZE]),
            buffer_len: 0,
            total_len: 0,
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Absorb the next chunk of the stream. Empty chunks are allowed.
    pub fn absorb(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);
        let round = self.round;
        let mut source = data;

        // 1. Top up a pending residual
        if self.buffer_len > 0 {
            let fill = (BLOCK_SIZE - self.buffer_len).min(source.len());
            let (head, rest) = source.split_at(fill);
            self.buffer.0[self.buffer_len..self.buffer_len + fill].copy_from_slice(head);
            self.buffer_len += fill;
            source = rest;

            if self.buffer_len == BLOCK_SIZE {
                round.absorb_blocks(&mut self.lanes, &self.buffer.0);
                self.buffer_len = 0;
            }
        }

        // 2. Whole blocks straight from the caller's slice
        let whole = source.len() - source.len() % BLOCK_SIZE;
        let (blocks, rest) = source.split_at(whole);
        round.absorb_blocks(&mut self.lanes, blocks);

        // 3. Keep the remainder
        self.buffer.0[self.buffer_len..self.buffer_len + rest.len()].copy_from_slice(rest);
        self.buffer_len += rest.len();
        debug_assert!(self.buffer_len < BLOCK_SIZE);
    }

    /// Bytes absorbed so far.
    #[must_use]
    pub const fn total_len(&self) -> u64 {
        self.total_len
    }

    // =========================================================================
    // FINALIZATION
    // =========================================================================

    /// Drain the residual and fold the lanes into the digest.
    ///
    /// The seeds must be the ones passed to `begin`.
    #[must_use]
    #[allow(unsafe_code)]
    pub fn end(self, seed1: u64, seed2: u64) -> Digest128 {
        let r = self.round;
        let mut s = self.lanes;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "meow::stream",
            backend = R::NAME,
            total_len = self.total_len,
            residual = self.buffer_len,
            "end"
        );

        // 1. Whole blocks still buffered (none while the residual invariant holds)
        let whole = self.buffer_len - self.buffer_len % BLOCK_SIZE;
        r.absorb_blocks(&mut s, &self.buffer.0[..whole]);
        let residual = &self.buffer.0[whole..self.buffer_len];

        let tail_bytes = residual.len() & (LANE_SIZE - 1);
        let lane_bytes = residual.len() & (BLOCK_SIZE - LANE_SIZE);

        // 2. Sub-16 fragment into S3
        if tail_bytes > 0 {
            // SAFETY: `whole + lane_bytes` is a multiple of 16 inside a 16-aligned
            // 64-byte buffer, so the window is the aligned, in-buffer one.
            let key = unsafe {
                page::load_partial(self.buffer.0.as_ptr().add(whole + lane_bytes), tail_bytes)
            };
            s[3] = r.round(s[3], key);
        }

        // 3. Whole 16-byte lanes: 48 rounds S2, S1, S0; 32 rounds S1, S0; 16 rounds S0
        if lane_bytes >= 3 * LANE_SIZE {
            s[2] = r.round(s[2], Lane::from_slice(&residual[2 * LANE_SIZE..]));
        }
        if lane_bytes >= 2 * LANE_SIZE {
            s[1] = r.round(s[1], Lane::from_slice(&residual[LANE_SIZE..]));
        }
        if lane_bytes >= LANE_SIZE {
            s[0] = r.round(s[0], Lane::from_slice(residual));
        }

        // 4. Seed mixing + cross-lane tree
        let digest = finalize::fold(r, s, seed1, seed2, self.total_len);
        Digest128::from_bytes(digest.to_bytes())
    }
}

// =============================================================================
// KEYED HASHER
// =============================================================================

/// Streaming hasher that remembers its seeds.
///
/// Matches [`hash`](crate::hash) when built with the true input length via
/// [`with_length`](Self::with_length); the other constructors announce a
/// length of 0.
#[derive(Clone, Debug)]
pub struct MeowHasher<R: RoundFunction = Portable> {
    state: HashState<R>,
    seed1: u64,
    seed2: u64,
    anticipated_len: u64,
}

impl MeowHasher<Portable> {
    /// Unseeded hasher with the table-driven round.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seeds(0, 0)
    }

    /// Seeded hasher with the table-driven round.
    #[must_use]
    pub fn with_seeds(seed1: u64, seed2: u64) -> Self {
        Self::with_length(seed1, seed2, 0)
    }

    /// Seeded hasher announcing the length it will be fed.
    #[must_use]
    pub fn with_length(seed1: u64, seed2: u64, anticipated_len: u64) -> Self {
        Self::with_round(Portable, seed1, seed2, anticipated_len)
    }
}

impl<R: RoundFunction> MeowHasher<R> {
    /// Seeded hasher over any round function.
    #[must_use]
    pub fn with_round(round: R, seed1: u64, seed2: u64, anticipated_len: u64) -> Self {
        Self {
            state: HashState::begin_with(round, seed1, seed2, anticipated_len),
            seed1,
            seed2,
            anticipated_len,
        }
    }

    /// Add data to the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.state.absorb(data);
    }

    /// Finalize and return the digest.
    #[must_use]
    pub fn finalize(self) -> Digest128 {
        self.state.end(self.seed1, self.seed2)
    }

    /// Restart with the same seeds and announced length.
    pub fn reset(&mut self) {
        self.state =
            HashState::begin_with(self.state.round, self.seed1, self.seed2, self.anticipated_len);
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for MeowHasher<Portable> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "digest-trait")]
impl<R: RoundFunction> OutputSizeUser for MeowHasher<R> {
    type OutputSize = U16;
}

#[cfg(feature = "digest-trait")]
impl KeySizeUser for MeowHasher<Portable> {
    type KeySize = U16;
}

#[cfg(feature = "digest-trait")]
impl<R: RoundFunction> Update for MeowHasher<R> {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl<R: RoundFunction> FixedOutput for MeowHasher<R> {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(self.finalize().as_bytes());
    }
}

#[cfg(feature = "digest-trait")]
impl<R: RoundFunction> Reset for MeowHasher<R> {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl<R: RoundFunction> HashMarker for MeowHasher<R> {}

#[cfg(feature = "digest-trait")]
impl KeyInit for MeowHasher<Portable> {
    /// Key bytes are `seed1 || seed2`, little-endian.
    fn new(key: &Key<Self>) -> Self {
        let mut seed1 = [0u8; 8];
        let mut seed2 = [0u8; 8];
        seed1.copy_from_slice(&key[..8]);
        seed2.copy_from_slice(&key[8..]);
        Self::with_seeds(u64::from_le_bytes(seed1), u64::from_le_bytes(seed2))
    }
}
