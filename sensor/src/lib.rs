//! Silo sensor daemon
//!
//! Runs one simulation engine on a fixed tick timer and bridges it to an
//! MQTT broker: telemetry out on every tick, commands in as they arrive.
//!
//! The engine itself (in `silo-simulator-core`) knows nothing about MQTT;
//! `adapter` is the thin shim translating broker callbacks into calls on
//! `Simulator::tick` and `handle_payload`.

pub mod adapter;
pub mod config;

pub use adapter::run;
pub use config::{ConfigError, SensorConfig};
