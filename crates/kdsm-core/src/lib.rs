//! KDSM (Keyed Dynamic Shift Matrix) text codec
//!
//! A deterministic, keyed, reversible transformation over Unicode text.
//! The key is reduced to a small integer seed, the seed drives a
//! position-dependent shift schedule, and each code point is transformed
//! according to its character class:
//!
//! ```text
//! Key ("test-key")
//!        │
//!        ▼ weighted code-unit sum, mod 10000
//! Seed (cached per key)
//!        │
//!        ▼ seed mod 97 / seed mod 11
//! Shift schedule: shift(i) = a + i*b
//!        │
//!        ▼ per code point
//! Classify → marker / shift-and-wrap / XOR
//!        │
//!        ▼
//! Reverse sequence, swap positions 2 and 3
//! ```
//!
//! Decoding mirrors every step in reverse order under the same key.
//!
//! # Compatibility
//!
//! The arithmetic here is load-bearing: payloads produced by other
//! implementations of the same scheme must decode bit-for-bit, so the
//! seed derivation, the iterative wrap loops, and the marker-range check
//! order are reproduced exactly rather than simplified.
//!
//! # Security
//!
//! This is an obfuscation codec, not a secure cipher. There is no
//! authentication tag, no resistance to known-plaintext or frequency
//! analysis, and decoding with the wrong key silently yields garbage.
//! Callers needing tamper detection must layer a MAC on top.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cipher;
pub mod codec;
pub mod env;
pub mod error;
pub mod keygen;
pub mod seed;
pub mod system_env;

pub use cipher::{decode_with_seed, encode_with_seed};
pub use codec::Codec;
pub use env::Environment;
pub use error::KeygenError;
pub use keygen::{DEFAULT_KEY_LENGTH, KeygenOptions, generate_key};
pub use seed::SeedCache;
pub use system_env::SystemEnv;
