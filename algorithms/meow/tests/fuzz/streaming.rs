use bolero::check;
use meow::{hash, HashState, Hasher};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected = hash(0, 0, data);
        let len = data.len() as u64;

        // =============================================================================
        // STREAMING VARIATIONS
        // =============================================================================

        // 1. Single Absorb
        let mut state = HashState::begin(0, 0, len);
        state.absorb(data);
        assert_eq!(state.end(0, 0), expected, "Streaming single absorb mismatch");

        // 2. Byte-by-Byte (Small Inputs Only)
        if data.len() < 256 {
            let mut state = HashState::begin(0, 0, len);
            for b in data {
                state.absorb(&[*b]);
            }
            assert_eq!(state.end(0, 0), expected, "Byte-by-byte streaming mismatch");
        }

        // 3. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = Hasher::with_length(0, 0, len);
                let (first, second) = data.split_at(split_idx);
                hasher.update(first);
                hasher.update(second);
                assert_eq!(hasher.finalize(), expected, "Split at {split_idx} mismatch");
            }
        }
    });
}

#[test]
fn fuzz_chunk_size_from_input() {
    check!().with_type::<(u8, u64, u64, Vec<u8>)>().for_each(|(chunk, s1, s2, data)| {
        let chunk_size = usize::from(*chunk) + 1;
        let mut state = HashState::begin(*s1, *s2, data.len() as u64);
        for piece in data.chunks(chunk_size) {
            state.absorb(piece);
        }
        assert_eq!(state.end(*s1, *s2), hash(*s1, *s2, data));
    });
}
