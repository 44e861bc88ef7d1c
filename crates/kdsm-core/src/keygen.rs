//! Random key and password generation.
//!
//! Independent of the codec: a generated key is just a string the caller
//! may later feed to seed derivation. The alphabet is assembled from
//! togglable character classes (or replaced wholesale by a custom set),
//! optionally filtered of visually similar characters, and sampled
//! uniformly through the environment RNG.

use crate::env::Environment;
use crate::error::KeygenError;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()";

/// Characters dropped by [`KeygenOptions::exclude_similar`].
const SIMILAR: &[char] = &['0', 'O', 'l', '1', 'I'];

/// Default generated key length.
pub const DEFAULT_KEY_LENGTH: usize = 10;

/// Alphabet configuration for key generation.
///
/// When `custom_chars` is set to a non-empty string it replaces the
/// class union entirely; the class toggles are ignored. The
/// similar-character filter applies to whichever alphabet is active,
/// custom sets included.
#[derive(Debug, Clone)]
pub struct KeygenOptions {
    /// Draw from `A..=Z`.
    pub include_uppercase: bool,
    /// Draw from `a..=z`.
    pub include_lowercase: bool,
    /// Draw from `0..=9`.
    pub include_numbers: bool,
    /// Draw from the fixed special set `!@#$%^&*()`.
    pub include_special_chars: bool,
    /// Drop the visually similar characters `0 O l 1 I` from the active
    /// alphabet before sampling.
    pub exclude_similar: bool,
    /// Replacement alphabet; overrides the class toggles when non-empty.
    pub custom_chars: Option<String>,
}

impl Default for KeygenOptions {
    fn default() -> Self {
        Self {
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special_chars: true,
            exclude_similar: false,
            custom_chars: None,
        }
    }
}

/// Generate a random key of exactly `length` characters.
///
/// Each character is drawn independently and uniformly from the active
/// alphabet. Entropy comes from the environment, so production strength
/// is the strength of [`Environment::random_bytes`].
///
/// # Errors
///
/// - `KeygenError::InvalidOptions` if the candidate alphabet is empty.
///   No partial output is produced in that case.
pub fn generate_key<E: Environment>(
    env: &E,
    length: usize,
    options: &KeygenOptions,
) -> Result<String, KeygenError> {
    let alphabet = candidate_alphabet(options);
    if alphabet.is_empty() {
        return Err(KeygenError::InvalidOptions);
    }

    let mut key = String::with_capacity(length);
    for _ in 0..length {
        let index = (env.random_u64() % alphabet.len() as u64) as usize;
        key.push(alphabet[index]);
    }

    Ok(key)
}

/// Assemble the active alphabet for the given options.
fn candidate_alphabet(options: &KeygenOptions) -> Vec<char> {
    let mut alphabet: Vec<char> = match &options.custom_chars {
        Some(custom) if !custom.is_empty() => custom.chars().collect(),
        _ => {
            let mut chars = Vec::new();
            if options.include_uppercase {
                chars.extend(UPPERCASE.chars());
            }
            if options.include_lowercase {
                chars.extend(LOWERCASE.chars());
            }
            if options.include_numbers {
                chars.extend(DIGITS.chars());
            }
            if options.include_special_chars {
                chars.extend(SPECIAL.chars());
            }
            chars
        },
    };

    if options.exclude_similar {
        alphabet.retain(|ch| !SIMILAR.contains(ch));
    }

    alphabet
}
