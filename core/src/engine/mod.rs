//! Simulation engine - the silo physical model
//!
//! Owns the silo state and advances it on a fixed clock. The engine is the
//! sole writer of telemetry; observers only ever reach it through commands.
//!
//! See `simulator.rs` for the integration rules.

pub mod config;
pub mod simulator;

// Re-export main types for convenience
pub use config::SimulatorConfig;
pub use simulator::Simulator;
