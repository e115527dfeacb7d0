//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG used for the per-tick level noise term.
//!
//! # Determinism
//!
//! Same seed → same noise sequence. This makes simulated telemetry runs
//! reproducible: a test can assert exact level trajectories instead of
//! asserting ranges, and a field issue can be replayed from its seed.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use silo_simulator_core::NoiseRng;
///
/// let mut rng = NoiseRng::new(12345);
/// let u = rng.next_f64(); // [0.0, 1.0)
/// assert!(u >= 0.0 && u < 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseRng {
    /// Internal state (64-bit)
    state: u64,
}

impl NoiseRng {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is remapped to 1 (xorshift requirement).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        // 53 high-quality bits mapped into [0.0, 1.0)
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Centered noise sample in range [-amplitude/2, +amplitude/2)
    ///
    /// This is the exact noise term the engine adds each tick:
    /// `(u - 0.5) * amplitude` with `u` uniform in [0, 1).
    pub fn noise(&mut self, amplitude: f64) -> f64 {
        (self.next_f64() - 0.5) * amplitude
    }

    /// Get current RNG state (for replay)
    pub fn state(&self) -> u64 {
        self.state
    }
}
