//! Seed derivation with per-key memoization.
//!
//! A key string is reduced to a small integer seed by a weighted sum
//! over its UTF-16 code units. The sum is exact for keys of any length
//! (no truncation), and the result is reduced into `[0, SEED_SPACE)`.
//!
//! Derived seeds are memoized per key. The cache is owned by a codec
//! instance rather than living in global state, so dropping the codec
//! resets it and tests never observe each other's entries.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Size of the seed space. Seeds are in `[0, SEED_SPACE)`.
pub const SEED_SPACE: u64 = 10_000;

/// Reduce a key to its seed by a position-weighted code-unit sum.
///
/// Position `i` (0-based) contributes `code_unit * (i + 1)`. The
/// accumulator is wide enough that the sum is exact for any realistic
/// key length, which other implementations of the scheme rely on when
/// validating payloads encoded elsewhere.
pub(crate) fn weighted_seed(key: &str) -> u32 {
    let mut sum: u128 = 0;
    for (i, unit) in key.encode_utf16().enumerate() {
        sum += u128::from(unit) * (i as u128 + 1);
    }
    (sum % u128::from(SEED_SPACE)) as u32
}

/// Unbounded per-key seed memoization.
///
/// Entries are never evicted. The expected workload is a handful of
/// distinct keys per process, so growth is bounded in practice by the
/// caller's key churn; long-lived services cycling through unbounded key
/// sets should drop and recreate the owning codec periodically.
///
/// Concurrent derives for the same key may race and both compute the
/// seed. Derivation is idempotent, so the duplicate work is the only
/// cost and the cache never holds conflicting values.
#[derive(Debug, Default)]
pub struct SeedCache {
    entries: Mutex<HashMap<String, u32>>,
}

impl SeedCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys derived so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether any key has been derived yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Derive the seed for a non-empty key, memoized.
    ///
    /// Empty keys are time-seeded and never cached; that path lives in
    /// [`crate::Codec::derive_seed`].
    pub(crate) fn derive(&self, key: &str) -> u32 {
        debug_assert!(!key.is_empty(), "empty keys must take the time fallback, not the cache");

        if let Some(&seed) = self.lock().get(key) {
            return seed;
        }

        // Computed outside the lock; a racing derive may duplicate the
        // computation but always inserts the same value.
        let seed = weighted_seed(key);
        self.lock().insert(key.to_owned(), seed);
        seed
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, u32>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
