//! Page-Safe Tail Load
//!
//! Turns a 1..15 byte fragment into a zero-padded 16-byte round key by
//! reading one whole 16-byte window, without ever touching a page that
//! holds none of the fragment's bytes.
//!
//! The window is picked from the fragment's address alone:
//!
//! | address                                         | window                    |
//! |-------------------------------------------------|---------------------------|
//! | 16-byte aligned                                 | direct aligned load       |
//! | at most `PAGE_SIZE - 16` bytes into its page    | direct unaligned load     |
//! | fragment itself runs onto the next page         | direct unaligned load     |
//! | otherwise (fragment ends on this page's tail)   | aligned load + shift down |
//!
//! An aligned 16-byte window can never straddle a page, and the shifted
//! window starts at the aligned address just below the fragment, so it
//! stays on the fragment's page.

use crate::kernels::constants::{LANE_SIZE, MASK_LEN, SHIFT_ADJUST};
use crate::kernels::lane::Lane;

/// Smallest page size the load assumes.
pub const PAGE_SIZE: usize = 4096;

/// Which 16-byte window covers a fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Window {
    /// Fragment starts on a 16-byte boundary; load it in place.
    Aligned,
    /// The 16 bytes from the fragment start are on mapped pages.
    Unaligned,
    /// Load at `addr - shift` and move the fragment down by `shift` bytes.
    Shifted(usize),
}

/// Choose the window for a `len`-byte fragment starting at `addr`.
#[must_use]
pub const fn plan(addr: usize, len: usize) -> Window {
    let align = addr & (LANE_SIZE - 1);
    if align == 0 {
        return Window::Aligned;
    }

    let offset = addr & (PAGE_SIZE - 1);
    if offset <= PAGE_SIZE - LANE_SIZE || offset + len > PAGE_SIZE {
        Window::Unaligned
    } else {
        Window::Shifted(align)
    }
}

/// Keep the first `len` bytes of `window`, zero the rest.
#[must_use]
#[inline]
pub fn mask(window: [u8; LANE_SIZE], len: usize) -> [u8; LANE_SIZE] {
    debug_assert!(len <= LANE_SIZE);
    let m = &MASK_LEN[LANE_SIZE - len..2 * LANE_SIZE - len];
    core::array::from_fn(|i| window[i] & m[i])
}

/// Move byte `shift + i` of `window` to position `i`; vacated bytes are zero.
#[must_use]
#[inline]
pub fn shift_down(window: [u8; LANE_SIZE], shift: usize) -> [u8; LANE_SIZE] {
    debug_assert!(shift < LANE_SIZE);
    let idx = &SHIFT_ADJUST[shift..shift + LANE_SIZE];
    core::array::from_fn(|i| {
        if idx[i] & 0x80 == 0 {
            window[(idx[i] & 0x0F) as usize]
        } else {
            0
        }
    })
}

/// Load a `len`-byte fragment (1..=15) as a zero-padded lane.
///
/// # Safety
/// - `ptr` must be valid for reads of `len` bytes.
/// - Every byte of each page touched by `ptr..ptr + len` must be readable.
/// - The 16-byte window chosen by [`plan`] must lie inside the same
///   allocated object as the fragment. Buffers of at least 16 bytes
///   aligned to 16, read at a multiple of 16, always satisfy this.
#[must_use]
#[inline]
#[allow(unsafe_code)]
pub unsafe fn load_partial(ptr: *const u8, len: usize) -> Lane {
    debug_assert!(len > 0 && len < LANE_SIZE);

    let window = match plan(ptr.addr(), len) {
        // SAFETY: caller guarantees the window is readable.
        Window::Aligned | Window::Unaligned => ptr.cast::<[u8; LANE_SIZE]>().read_unaligned(),
        Window::Shifted(shift) => {
            // SAFETY: `ptr - shift` is 16-byte aligned and on the fragment's page.
            let raw = ptr.sub(shift).cast::<[u8; LANE_SIZE]>().read_unaligned();
            shift_down(raw, shift)
        }
    };

    Lane::from_bytes(mask(window, len))
}
