//! Silo Simulator Core - Rust Engine
//!
//! Tick-based silo level simulator with a JSON telemetry/command protocol.
//!
//! # Architecture
//!
//! - **core**: Wall-clock helpers
//! - **engine**: The silo physical model (level, capacity, flow flags)
//! - **command**: Inbound command schema and interpreter
//! - **protocol**: Telemetry message schema and MQTT topic naming
//! - **rng**: Deterministic random number generation (level noise)
//!
//! # Critical Invariants
//!
//! 1. `0 <= level <= capacity` holds after every `tick()`
//! 2. All randomness is deterministic (seeded RNG)
//! 3. This crate knows nothing about the transport; the sensor daemon
//!    translates broker callbacks into calls on `Simulator` and
//!    `handle_payload`

// Module declarations
pub mod command;
pub mod core;
pub mod engine;
pub mod protocol;
pub mod rng;

// Re-exports for convenience
pub use command::{
    handler::{handle_command, handle_payload, CommandError, CommandOutcome},
    types::{Command, CommandAction},
};
pub use crate::core::time::unix_time_millis;
pub use engine::{Simulator, SimulatorConfig};
pub use protocol::{telemetry::Telemetry, topics::DeviceTopics};
pub use rng::NoiseRng;
