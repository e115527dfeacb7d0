//! Silo simulator - tick-based level integration
//!
//! The simulator advances once per tick:
//!
//! ```text
//! For each tick t:
//! 1. change = (+fill_rate if filling) + (-empty_rate if emptying)
//! 2. If change != 0 or level > 0: change += (u - 0.5) * noise
//! 3. level = clamp(level + change, 0, capacity)
//! 4. timestamp = now
//! 5. Emit one telemetry snapshot
//! ```
//!
//! Fill and empty are independent valves; both open at once integrates
//! `fill_rate - empty_rate` per tick. The noise gate in step 2 keeps an
//! idle empty tank exactly at zero instead of jittering around it.
//!
//! # Example
//!
//! ```
//! use silo_simulator_core::{Simulator, SimulatorConfig};
//!
//! let mut silo = Simulator::new(SimulatorConfig {
//!     fill_rate: 20.0,
//!     noise: 0.0,
//!     ..SimulatorConfig::default()
//! });
//!
//! silo.start_fill();
//! let telemetry = silo.tick();
//! assert_eq!(telemetry.level, 20.0);
//! assert!(telemetry.is_filling);
//! ```

use crate::core::time::unix_time_millis;
use crate::engine::config::SimulatorConfig;
use crate::protocol::telemetry::Telemetry;
use crate::rng::NoiseRng;

/// Tick-based silo level simulator
///
/// Owns all silo state. Mutation happens only through `tick()` and the
/// command-facing operations below; callers never write fields directly.
///
/// # Invariant
///
/// `0 <= level <= capacity` holds immediately after every `tick()`.
/// Between a CONFIGURE that shrinks capacity and the next tick the
/// invariant may be transiently violated; the tick clamp heals it.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Volume currently held (liters)
    level: f64,

    /// Maximum holdable volume (liters)
    capacity: f64,

    /// Inflow per tick while filling (liters)
    fill_rate: f64,

    /// Outflow per tick while emptying (liters)
    empty_rate: f64,

    /// Noise amplitude
    noise: f64,

    /// Inflow valve state
    is_filling: bool,

    /// Outflow valve state
    is_emptying: bool,

    /// Material hardness in [0, 100]; carried in telemetry, never used
    /// by the integration step
    hardness: f64,

    /// Wall-clock milliseconds at the last tick
    timestamp: u64,

    /// Ticks executed since construction
    tick_count: u64,

    /// Deterministic noise source
    rng: NoiseRng,
}

impl Simulator {
    /// Create a new simulator from configuration
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            level: config.level,
            capacity: config.capacity,
            fill_rate: config.fill_rate,
            empty_rate: config.empty_rate,
            noise: config.noise,
            is_filling: false,
            is_emptying: false,
            hardness: 50.0,
            timestamp: 0,
            tick_count: 0,
            rng: NoiseRng::new(config.rng_seed),
        }
    }

    /// Advance the simulation by one tick and emit telemetry
    ///
    /// This is the engine's only observable output per tick. It cannot
    /// fail; clamping guarantees the level invariant on exit.
    pub fn tick(&mut self) -> Telemetry {
        let mut change = 0.0;
        if self.is_filling {
            change += self.fill_rate;
        }
        if self.is_emptying {
            change -= self.empty_rate;
        }

        // Noise gate: an idle empty tank stays exactly at zero
        if change != 0.0 || self.level > 0.0 {
            change += self.rng.noise(self.noise);
        }

        // min-then-max so a nonsense negative capacity still lands at 0
        self.level = (self.level + change).min(self.capacity).max(0.0);
        self.timestamp = unix_time_millis();
        self.tick_count += 1;

        self.snapshot()
    }

    /// Open the inflow valve
    pub fn start_fill(&mut self) {
        self.is_filling = true;
    }

    /// Close the inflow valve
    pub fn stop_fill(&mut self) {
        self.is_filling = false;
    }

    /// Open the outflow valve
    pub fn start_empty(&mut self) {
        self.is_emptying = true;
    }

    /// Close the outflow valve
    pub fn stop_empty(&mut self) {
        self.is_emptying = false;
    }

    /// Jump the level to a percentage of capacity, bypassing the rate model
    ///
    /// No range validation: out-of-range percentages pass through and the
    /// next tick's clamp pulls the level back into bounds. No other field
    /// changes.
    pub fn set_level(&mut self, percentage: f64) {
        self.level = (percentage / 100.0) * self.capacity;
    }

    /// Apply a partial reconfiguration
    ///
    /// Present fields overwrite, absent fields are untouched. Shrinking
    /// capacity below the current level is allowed and NOT rescaled here;
    /// the next tick clamps. Values are accepted as-is — there is no range
    /// validation on either field.
    pub fn configure(&mut self, capacity: Option<f64>, hardness: Option<f64>) {
        if let Some(capacity) = capacity {
            self.capacity = capacity;
        }
        if let Some(hardness) = hardness {
            self.hardness = hardness;
        }
    }

    /// Current state as a telemetry message
    ///
    /// Carries the timestamp of the last tick; `tick()` is the only place
    /// the clock is read.
    pub fn snapshot(&self) -> Telemetry {
        Telemetry {
            level: self.level,
            percentage: self.percentage(),
            capacity: self.capacity,
            is_filling: self.is_filling,
            is_emptying: self.is_emptying,
            hardness: self.hardness,
            timestamp: self.timestamp,
        }
    }

    /// Derived fill ratio, guarded against division by zero
    ///
    /// Divide before scaling: `level / capacity` is exactly 1.0 at full,
    /// so a full silo reports exactly 100 instead of drifting a ULP past
    /// it for some capacities.
    pub fn percentage(&self) -> f64 {
        if self.capacity == 0.0 {
            0.0
        } else {
            (self.level / self.capacity) * 100.0
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn is_filling(&self) -> bool {
        self.is_filling
    }

    pub fn is_emptying(&self) -> bool {
        self.is_emptying
    }

    pub fn hardness(&self) -> f64 {
        self.hardness
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noiseless() -> Simulator {
        Simulator::new(SimulatorConfig::noiseless())
    }

    #[test]
    fn test_new_simulator_starts_idle() {
        let silo = noiseless();

        assert_eq!(silo.level(), 0.0);
        assert!(!silo.is_filling());
        assert!(!silo.is_emptying());
        assert_eq!(silo.hardness(), 50.0);
        assert_eq!(silo.tick_count(), 0);
    }

    #[test]
    fn test_idle_empty_tank_stays_at_exact_zero() {
        // Noise enabled, but the gate must keep a level of 0 with both
        // valves closed perfectly still
        let mut silo = Simulator::new(SimulatorConfig::default());

        for _ in 0..100 {
            let telemetry = silo.tick();
            assert_eq!(telemetry.level, 0.0);
        }
    }

    #[test]
    fn test_fill_adds_rate_per_tick() {
        let mut silo = noiseless();
        silo.start_fill();

        silo.tick();
        silo.tick();
        silo.tick();

        assert_eq!(silo.level(), 60.0);
    }

    #[test]
    fn test_simultaneous_fill_and_empty_is_additive() {
        let mut silo = noiseless();
        silo.start_fill();
        silo.start_empty();

        let telemetry = silo.tick();

        // fill_rate 20 - empty_rate 15 = +5
        assert_eq!(telemetry.level, 5.0);
    }

    #[test]
    fn test_tick_stamps_wall_clock() {
        let mut silo = noiseless();
        assert_eq!(silo.snapshot().timestamp, 0);

        let telemetry = silo.tick();
        assert!(telemetry.timestamp > 1_577_836_800_000);
    }

    #[test]
    fn test_set_level_is_percentage_of_capacity() {
        let mut silo = noiseless();

        silo.set_level(50.0);
        assert_eq!(silo.level(), 5000.0);

        silo.set_level(0.0);
        assert_eq!(silo.level(), 0.0);
    }

    #[test]
    fn test_configure_partial_update() {
        let mut silo = noiseless();
        silo.set_level(10.0);

        silo.configure(None, Some(80.0));

        assert_eq!(silo.hardness(), 80.0);
        assert_eq!(silo.capacity(), 10_000.0);
        assert_eq!(silo.level(), 1000.0);
    }

    #[test]
    fn test_percentage_guards_zero_capacity() {
        let mut silo = noiseless();
        silo.configure(Some(0.0), None);

        assert_eq!(silo.percentage(), 0.0);
    }

    #[test]
    fn test_percentage_exact_at_full_for_awkward_capacity() {
        // level / capacity is exactly 1.0 at full; scaling afterwards
        // must not push the percentage a ULP past 100
        let mut silo = noiseless();
        silo.configure(Some(21596.590175559137), None);

        silo.set_level(168.95);
        silo.tick(); // clamps to capacity

        assert_eq!(silo.level(), silo.capacity());
        assert_eq!(silo.percentage(), 100.0);
    }

    #[test]
    fn test_capacity_shrink_heals_on_next_tick() {
        let mut silo = noiseless();
        silo.set_level(80.0); // 8000 L

        // Shrink below the current level: transiently over capacity
        silo.configure(Some(5000.0), None);
        assert!(silo.level() > silo.capacity());

        silo.tick();
        assert_eq!(silo.level(), 5000.0);
    }
}
