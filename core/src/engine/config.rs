//! Engine configuration
//!
//! All parameters needed to construct a `Simulator`. The engine is built
//! explicitly from this struct and injected wherever it is needed — there
//! is no module-level singleton, so tests can run any number of
//! independent engines side by side.

/// Complete simulator configuration
///
/// # Fields
///
/// * `capacity` - Maximum holdable volume in liters
/// * `level` - Opening volume in liters
/// * `fill_rate` - Inflow in liters per tick while filling
/// * `empty_rate` - Outflow in liters per tick while emptying
/// * `noise` - Amplitude of the per-tick uniform noise term
/// * `rng_seed` - Seed for deterministic noise generation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Maximum holdable volume (liters)
    pub capacity: f64,

    /// Opening volume (liters)
    pub level: f64,

    /// Liters added per tick while the fill valve is open
    pub fill_rate: f64,

    /// Liters removed per tick while the empty valve is open
    pub empty_rate: f64,

    /// Noise amplitude; each active tick adds `(u - 0.5) * noise`, u in [0,1)
    pub noise: f64,

    /// RNG seed for deterministic noise
    pub rng_seed: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            capacity: 10_000.0, // liters
            level: 0.0,
            fill_rate: 20.0,  // liters/tick
            empty_rate: 15.0, // liters/tick
            noise: 0.5,
            rng_seed: 12345,
        }
    }
}

impl SimulatorConfig {
    /// Configuration with the noise term disabled
    ///
    /// Used by tests that assert exact level arithmetic.
    pub fn noiseless() -> Self {
        Self {
            noise: 0.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_deployment() {
        let config = SimulatorConfig::default();

        assert_eq!(config.capacity, 10_000.0);
        assert_eq!(config.level, 0.0);
        assert_eq!(config.fill_rate, 20.0);
        assert_eq!(config.empty_rate, 15.0);
        assert_eq!(config.noise, 0.5);
    }

    #[test]
    fn test_noiseless_only_zeroes_noise() {
        let config = SimulatorConfig::noiseless();

        assert_eq!(config.noise, 0.0);
        assert_eq!(config.capacity, SimulatorConfig::default().capacity);
    }
}
