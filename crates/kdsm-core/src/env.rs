//! Environment abstraction for deterministic testing.
//!
//! Decouples the codec from system resources (wall-clock time,
//! randomness). The codec has exactly two impure inputs: the timestamp
//! used as the empty-key seed fallback, and the entropy drawn during key
//! generation. Routing both through this trait keeps every operation
//! reproducible under test while production uses real system resources.

/// Abstract environment providing time and randomness.
///
/// Implementations MUST guarantee:
///
/// - `unix_time_ms()` never goes backwards within a single execution
///   context
/// - `random_bytes()` uses cryptographically secure entropy in
///   production, falling back to a non-cryptographic source only when
///   the OS provides none
pub trait Environment: Clone + Send + Sync + 'static {
    /// Milliseconds since the Unix epoch.
    ///
    /// Feeds the empty-key seed fallback, so two calls within the same
    /// millisecond must observe the same value.
    fn unix_time_ms(&self) -> u64;

    /// Fills the provided buffer with random bytes.
    ///
    /// Given the same environment state, a deterministic implementation
    /// produces the same sequence of bytes.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    ///
    /// Convenience for uniform index sampling during key generation.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }
}
