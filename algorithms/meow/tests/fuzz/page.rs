use bolero::check;
use meow::engine::page::{load_partial, plan, Window, PAGE_SIZE};

#[test]
fn fuzz_page_plan_stays_on_page() {
    check!().with_type::<(usize, u8)>().for_each(|(addr, len)| {
        let len = usize::from(*len % 15) + 1;
        let addr = *addr % (1 << 30);
        let page_start = addr & !(PAGE_SIZE - 1);
        let page_end = page_start + PAGE_SIZE;

        match plan(addr, len) {
            Window::Aligned => assert_eq!(addr % 16, 0),
            Window::Unaligned => {
                // Either the whole read fits the page or the fragment spills anyway.
                let fits = addr - page_start <= PAGE_SIZE - 16;
                let spills = addr - page_start + len > PAGE_SIZE;
                assert!(fits || spills);
            }
            Window::Shifted(shift) => {
                let start = addr - shift;
                assert_eq!(start % 16, 0);
                assert!(start >= page_start && start + 16 <= page_end);
            }
        }
    });
}

#[test]
#[allow(unsafe_code)]
fn fuzz_load_partial_in_buffer() {
    #[repr(C, align(16))]
    struct Block([u8; 64]);

    check!().with_type::<(Vec<u8>, u8, u8)>().for_each(|(bytes, lane, len)| {
        let mut block = Block([0u8; 64]);
        let n = bytes.len().min(64);
        block.0[..n].copy_from_slice(&bytes[..n]);
        let start = usize::from(*lane % 4) * 16;
        let len = usize::from(*len % 15) + 1;

        // SAFETY: 16-aligned start inside a 16-aligned 64-byte buffer.
        let loaded = unsafe { load_partial(block.0.as_ptr().add(start), len) };

        let mut expected = [0u8; 16];
        expected[..len].copy_from_slice(&block.0[start..start + len]);
        assert_eq!(loaded.to_bytes(), expected);
    });
}
