//! Calling-layer support for the KDSM command-line tool.
//!
//! The codec itself lives in `kdsm-core` and knows nothing about how
//! keys travel alongside ciphertext. This crate owns the conventions of
//! the layer above it: the embedded-key wire framing and the errors the
//! tool reports.

use thiserror::Error;

pub mod wire;

/// Errors surfaced by the command-line tool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// Decrypt was invoked with no key and the message carries no
    /// embedded-key framing.
    #[error("no key supplied and none embedded in the message")]
    MissingKey,
}
