//! Fuzz target for key generation
//!
//! # Strategy
//!
//! - Arbitrary class toggles, custom alphabets, and lengths
//! - Seeded deterministic RNG stream per scenario
//!
//! # Invariants
//!
//! - Generation fails exactly when the candidate alphabet is empty
//! - Successful output has the requested length
//! - Every output character belongs to the active alphabet

#![no_main]

use arbitrary::Arbitrary;
use kdsm_core::{Environment, KeygenError, KeygenOptions, generate_key};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct KeygenScenario {
    length: u16,
    include_uppercase: bool,
    include_lowercase: bool,
    include_numbers: bool,
    include_special_chars: bool,
    exclude_similar: bool,
    custom_chars: Option<String>,
    rng_seed: u64,
}

#[derive(Clone)]
struct FuzzEnv {
    rng_seed: u64,
}

impl Environment for FuzzEnv {
    fn unix_time_ms(&self) -> u64 {
        0
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        let mut state = self.rng_seed | 1;
        for byte in buffer.iter_mut() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            *byte = (state >> 56) as u8;
        }
    }
}

/// Mirror of the generator's alphabet assembly, used as a differential
/// oracle for the containment and emptiness invariants.
fn expected_alphabet(scenario: &KeygenScenario) -> Vec<char> {
    let mut alphabet: Vec<char> = match &scenario.custom_chars {
        Some(custom) if !custom.is_empty() => custom.chars().collect(),
        _ => {
            let mut chars = Vec::new();
            if scenario.include_uppercase {
                chars.extend('A'..='Z');
            }
            if scenario.include_lowercase {
                chars.extend('a'..='z');
            }
            if scenario.include_numbers {
                chars.extend('0'..='9');
            }
            if scenario.include_special_chars {
                chars.extend("!@#$%^&*()".chars());
            }
            chars
        }
    };
    if scenario.exclude_similar {
        alphabet.retain(|ch| !matches!(ch, '0' | 'O' | 'l' | '1' | 'I'));
    }
    alphabet
}

fuzz_target!(|scenario: KeygenScenario| {
    let env = FuzzEnv { rng_seed: scenario.rng_seed };
    let length = usize::from(scenario.length % 512);

    let options = KeygenOptions {
        include_uppercase: scenario.include_uppercase,
        include_lowercase: scenario.include_lowercase,
        include_numbers: scenario.include_numbers,
        include_special_chars: scenario.include_special_chars,
        exclude_similar: scenario.exclude_similar,
        custom_chars: scenario.custom_chars.clone(),
    };

    let alphabet = expected_alphabet(&scenario);

    match generate_key(&env, length, &options) {
        Ok(key) => {
            assert!(!alphabet.is_empty(), "generation must fail on an empty alphabet");
            assert_eq!(key.chars().count(), length);
            assert!(key.chars().all(|ch| alphabet.contains(&ch)), "character outside alphabet");
        }
        Err(KeygenError::InvalidOptions) => {
            assert!(alphabet.is_empty(), "generation must succeed on a non-empty alphabet");
        }
    }
});
