use bolero::check;
use meow::{hash, verify, Digest128};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let h = hash(0, 0, data);
        assert!(verify(0, 0, data, &h), "verify() failed on correct data");

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Data Corruption
        if !data.is_empty() {
            let mut corrupted_data = data.clone();
            corrupted_data[0] ^= 0x01;
            assert!(
                !verify(0, 0, &corrupted_data, &h),
                "verify() succeeded on corrupted data"
            );
        }

        // 2. Hash Corruption
        let mut bad_bytes = h.to_bytes();
        bad_bytes[0] ^= 0xFF;
        let bad_h = Digest128::from_bytes(bad_bytes);

        assert!(
            !verify(0, 0, data, &bad_h),
            "verify() succeeded on corrupted hash"
        );
    });
}
