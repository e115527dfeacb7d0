//! Inbound command schema and interpreter
//!
//! Observers mutate silo state only by publishing commands; this module
//! decodes them and maps each action onto exactly one engine operation.

pub mod handler;
pub mod types;

// Re-exports
pub use handler::{handle_command, handle_payload, CommandError, CommandOutcome};
pub use types::{Command, CommandAction};
