//! Fuzz target for the KDSM encoder/decoder
//!
//! # Strategy
//!
//! - Arbitrary Unicode messages, including classes the scheme cannot
//!   round-trip (control characters, the Latin-1/IPA collision band)
//! - The full seed space
//!
//! # Invariants
//!
//! - Neither direction panics on any string
//! - Encoding maps code points one-to-one
//! - Round-trip holds for every character outside the known lossy band

#![no_main]

use arbitrary::Arbitrary;
use kdsm_core::{decode_with_seed, encode_with_seed};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct CodecScenario {
    message: String,
    seed: u32,
}

/// Characters the scheme round-trips: printable ASCII, tab/LF/CR, and
/// code points at 512 or above, whose XOR image cannot reach a marker
/// band or the printable range.
fn roundtrips(ch: char) -> bool {
    let code = u32::from(ch);
    matches!(code, 9 | 10 | 13) || (32..=126).contains(&code) || code >= 512
}

fuzz_target!(|scenario: CodecScenario| {
    let seed = scenario.seed % 10_000;

    // Totality: arbitrary strings through both directions
    let encoded = encode_with_seed(&scenario.message, seed);
    let _ = decode_with_seed(&scenario.message, seed);

    // One code point out per code point in
    assert_eq!(encoded.chars().count(), scenario.message.chars().count());

    // Round-trip outside the lossy band
    let clean: String = scenario.message.chars().filter(|&ch| roundtrips(ch)).collect();
    let encoded = encode_with_seed(&clean, seed);
    assert_eq!(decode_with_seed(&encoded, seed), clean, "round-trip failed for seed {seed}");
});
