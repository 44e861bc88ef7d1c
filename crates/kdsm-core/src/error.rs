//! Error types for codec operations.
//!
//! Encoding and decoding are total over string inputs and have no error
//! path; a mismatched key surfaces as garbage output, not as an error.
//! Key generation is the only fallible operation.

use thiserror::Error;

/// Errors from key generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeygenError {
    /// The selected options leave no characters to sample from: every
    /// character class is disabled and no custom characters were given,
    /// or the similar-character filter emptied the alphabet.
    #[error("invalid key generation options: candidate alphabet is empty")]
    InvalidOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            KeygenError::InvalidOptions.to_string(),
            "invalid key generation options: candidate alphabet is empty"
        );
    }
}
