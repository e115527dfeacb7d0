//! Telemetry/command wire protocol
//!
//! Defines the contract every component must honor: JSON payload schemas
//! and the hierarchical MQTT topic layout. The field set is frozen — there
//! is no schema-version field, so publisher and subscribers must be
//! deployed in lockstep.

pub mod telemetry;
pub mod topics;

// Re-exports
pub use telemetry::Telemetry;
pub use topics::DeviceTopics;
