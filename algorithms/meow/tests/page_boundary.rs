//! Page Boundary Tests
//!
//! Places fragments flush against an inaccessible guard page. A load that
//! strays past the fragment's page faults instead of silently reading.

#![cfg(unix)]
#![allow(unsafe_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation)]

use meow::engine::page::{load_partial, plan, Window};
use meow::{hash, HashState, PAGE_SIZE};

/// One readable page followed by a `PROT_NONE` guard page.
struct GuardedPage {
    base: *mut u8,
    page: usize,
}

impl GuardedPage {
    fn new() -> Self {
        // SAFETY: plain anonymous mapping; every return value is checked.
        unsafe {
            let page = usize::try_from(libc::sysconf(libc::_SC_PAGESIZE)).unwrap();
            assert_eq!(page % PAGE_SIZE, 0);
            let base = libc::mmap(
                std::ptr::null_mut(),
                2 * page,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            );
            assert_ne!(base, libc::MAP_FAILED, "mmap failed");
            let guard = base.cast::<u8>().add(page);
            assert_eq!(libc::mprotect(guard.cast(), page, libc::PROT_NONE), 0);
            Self {
                base: base.cast(),
                page,
            }
        }
    }

    /// The last `len` readable bytes, filled with a recognisable pattern.
    fn tail(&mut self, len: usize) -> &[u8] {
        // SAFETY: the first page is mapped read/write and `len <= page`.
        unsafe {
            let bytes = std::slice::from_raw_parts_mut(self.base.add(self.page - len), len);
            for (i, b) in bytes.iter_mut().enumerate() {
                *b = (i as u8).wrapping_mul(7).wrapping_add(1);
            }
            bytes
        }
    }
}

impl Drop for GuardedPage {
    fn drop(&mut self) {
        // SAFETY: unmaps exactly the region created in `new`.
        unsafe {
            libc::munmap(self.base.cast(), 2 * self.page);
        }
    }
}

#[test]
fn test_fragment_flush_against_guard_page() {
    let mut region = GuardedPage::new();

    for len in 1..16 {
        let fragment = region.tail(len).to_vec();
        let ptr = region.tail(len).as_ptr();

        let window = plan(ptr.addr(), len);
        assert_ne!(window, Window::Unaligned, "len {len} would read the guard page");

        // SAFETY: the fragment is readable and its page is fully mapped.
        let lane = unsafe { load_partial(ptr, len) };

        let mut expected = [0u8; 16];
        expected[..len].copy_from_slice(&fragment);
        assert_eq!(lane.to_bytes(), expected, "len {len}");
    }
}

// `absorb` copies the residual into its own aligned buffer, so this checks
// that the block and residual paths never read past the caller's slice.
#[test]
fn test_absorb_stays_within_input_slice() {
    let mut region = GuardedPage::new();

    for len in [1, 15, 17, 63, 64 + 5, 128 + 15, 256 + 48 + 3] {
        let data = region.tail(len);
        let expected = hash(11, 12, data);

        let mut state = HashState::begin(11, 12, len as u64);
        state.absorb(data);
        assert_eq!(state.end(11, 12), expected, "len {len}");
    }
}
