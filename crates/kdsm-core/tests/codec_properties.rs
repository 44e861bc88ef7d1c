//! Property-based tests for the KDSM codec
//!
//! These tests verify the fundamental invariants of the scheme:
//!
//! 1. **Round-trip**: decode(encode(m, k), k) == m for every character
//!    class the scheme round-trips (printable ASCII, tab/LF/CR, and
//!    code points outside the known lossy band)
//! 2. **Determinism**: same key always produces same seed and output
//! 3. **Totality**: no input string or seed panics either direction
//! 4. **Shape**: encoding maps code points one-to-one

use kdsm_core::{Codec, Environment, decode_with_seed, encode_with_seed};
use proptest::prelude::*;

/// Deterministic environment: fixed clock, fixed RNG fill.
#[derive(Clone)]
struct TestEnv;

impl Environment for TestEnv {
    fn unix_time_ms(&self) -> u64 {
        1_700_000_000_000
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        buffer.fill(0x42);
    }
}

/// Characters the scheme round-trips.
///
/// Excludes the inherited lossy band: code points in `[128, 511]` and
/// non-whitespace controls (plus DEL) can XOR-encode into a marker band
/// or the printable range and decode differently.
fn roundtrip_char() -> impl Strategy<Value = char> {
    prop_oneof![
        5 => prop::char::range(' ', '~'),
        1 => prop_oneof![Just('\t'), Just('\n'), Just('\r')],
        2 => prop::char::range('\u{0200}', '\u{D7FF}'),
        1 => prop::char::range('\u{E000}', '\u{FFFD}'),
        1 => prop::char::range('\u{10000}', '\u{10FFFF}'),
    ]
}

fn roundtrip_message() -> impl Strategy<Value = String> {
    prop::collection::vec(roundtrip_char(), 0..200).prop_map(|chars| chars.into_iter().collect())
}

fn nonempty_key() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 1..24).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_round_trip_under_any_seed(
        message in roundtrip_message(),
        seed in 0u32..10_000,
    ) {
        let encoded = encode_with_seed(&message, seed);
        prop_assert_eq!(decode_with_seed(&encoded, seed), message);
    }

    #[test]
    fn prop_round_trip_under_any_key(
        message in roundtrip_message(),
        key in nonempty_key(),
    ) {
        let codec = Codec::with_env(TestEnv);
        let encoded = codec.encode(&message, &key);
        prop_assert_eq!(codec.decode(&encoded, &key), message);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_seed_derivation_deterministic(key in nonempty_key()) {
        let codec = Codec::with_env(TestEnv);
        let first = codec.derive_seed(&key);
        let second = codec.derive_seed(&key);

        prop_assert_eq!(first, second);
        prop_assert!(u64::from(first) < 10_000);
    }

    #[test]
    fn prop_encoding_is_deterministic(
        message in roundtrip_message(),
        key in nonempty_key(),
    ) {
        let codec = Codec::with_env(TestEnv);
        prop_assert_eq!(codec.encode(&message, &key), codec.encode(&message, &key));
    }

    #[test]
    fn prop_encode_maps_code_points_one_to_one(
        message in roundtrip_message(),
        seed in 0u32..10_000,
    ) {
        let encoded = encode_with_seed(&message, seed);
        prop_assert_eq!(encoded.chars().count(), message.chars().count());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_decode_never_panics_on_garbage(
        ciphertext in any::<String>(),
        seed in 0u32..10_000,
    ) {
        // Output is unspecified for inputs the encoder never produces,
        // but the decoder must stay total.
        let _ = decode_with_seed(&ciphertext, seed);
    }

    #[test]
    fn prop_encode_never_panics_on_any_string(
        message in any::<String>(),
        seed in 0u32..10_000,
    ) {
        let _ = encode_with_seed(&message, seed);
    }
}
