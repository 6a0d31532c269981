#![no_main]

use libfuzzer_sys::fuzz_target;
use meow::{HashState, Lane, Portable, RoundFunction};

fn streamed<R: RoundFunction>(round: R, data: &[u8]) -> meow::Digest128 {
    let mut state = HashState::begin_with(round, 1, 2, data.len() as u64);
    state.absorb(data);
    state.end(1, 2)
}

fn check<R: RoundFunction>(round: R, data: &[u8]) {
    // Single round on the first 32 bytes as lane and key
    if data.len() >= 32 {
        let lane = Lane::from_slice(&data[..16]);
        let key = Lane::from_slice(&data[16..32]);
        assert_eq!(round.round(lane, key), Portable.round(lane, key));
    }

    assert_eq!(
        streamed(round, data),
        meow::hash(1, 2, data),
        "{} diverges from the table-driven round",
        R::NAME
    );
}

fuzz_target!(|data: &[u8]| {
    check(Portable, data);

    #[cfg(target_arch = "x86_64")]
    if let Ok(aesni) = meow::AesNi::new() {
        check(aesni, data);
    }

    #[cfg(target_arch = "aarch64")]
    if let Ok(neon) = meow::NeonAes::new() {
        check(neon, data);
    }
});
