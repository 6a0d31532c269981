#![no_main]

use libfuzzer_sys::fuzz_target;
use meow::HashState;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // Chunk size is derived from the first byte (1 to 256)
    let chunk_size = usize::from(data[0]) + 1;
    let payload = &data[1..];

    // Calculate one-shot hash as reference
    let reference_hash = meow::hash(0, 0, payload);

    // Calculate streaming hash by splitting into arbitrary small chunks
    let mut state = HashState::begin(0, 0, payload.len() as u64);
    for chunk in payload.chunks(chunk_size) {
        state.absorb(chunk);
    }
    let streaming_hash = state.end(0, 0);

    // They must be identical
    assert_eq!(
        reference_hash, streaming_hash,
        "Streaming and One-Shot approaches differ!"
    );
});
