//! Production Environment implementation using system time and RNG.
//!
//! `SystemEnv` is the production implementation of the [`Environment`]
//! trait using the real system clock and OS cryptographic RNG.
//!
//! # Capabilities
//!
//! - Real wall-clock time (`std::time::SystemTime`)
//! - OS cryptographic RNG (getrandom). Truly random, not reproducible
//! - A time-seeded non-cryptographic fallback when OS entropy is
//!   unavailable, so key generation keeps working on exotic hosts
//!
//! This means production behavior is non-deterministic. Tests should use
//! a fixed-value environment instead.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::env::Environment;

/// Production environment using system time and cryptographic RNG.
///
/// The RNG prefers getrandom, which provides OS-level cryptographic
/// randomness (`/dev/urandom` on Linux, `BCryptGenRandom` on Windows).
/// If the OS RNG reports failure, the buffer is filled from a `SmallRng`
/// seeded with the current wall clock. Generated keys remain usable in
/// that mode but carry no cryptographic strength guarantee.
#[derive(Clone, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    #[allow(clippy::disallowed_methods)]
    #[allow(clippy::expect_used)]
    fn unix_time_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("invariant: system clock is after Unix epoch (1970-01-01)")
            .as_millis() as u64
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        if getrandom::fill(buffer).is_err() {
            // OS entropy unavailable: degrade to a time-seeded
            // non-cryptographic PRNG instead of refusing to operate.
            let mut rng = SmallRng::seed_from_u64(self.unix_time_ms());
            rng.fill(buffer);
        }
    }
}
