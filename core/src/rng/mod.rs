//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, deterministic level noise.
//! CRITICAL: All randomness in the simulator MUST go through this module.

mod xorshift;

pub use xorshift::NoiseRng;
