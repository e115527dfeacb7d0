//! Command dispatch
//!
//! Maps one inbound command to one engine mutation:
//!
//! | action      | effect                                        |
//! |-------------|-----------------------------------------------|
//! | START_FILL  | open inflow valve                             |
//! | STOP_FILL   | close inflow valve                            |
//! | START_EMPTY | open outflow valve                            |
//! | STOP_EMPTY  | close outflow valve                           |
//! | SET_LEVEL   | jump to `value`% of capacity (no-op if absent)|
//! | CONFIGURE   | overwrite capacity/hardness where present     |
//!
//! Unknown actions and malformed payloads never reach the engine and
//! never stop the tick loop: unknown actions dispatch as an explicit
//! no-op, malformed payloads surface as `CommandError::Decode` for the
//! caller to log and discard.

use crate::command::types::{Command, CommandAction};
use crate::engine::Simulator;
use thiserror::Error;

/// Errors raised while handling an inbound command payload
///
/// All variants are non-fatal by design; the transport adapter logs
/// them and moves on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid command payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// What the interpreter did with a successfully decoded command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A known action was dispatched to the engine
    Applied(CommandAction),

    /// The action string is not in the dispatch table; state untouched
    Ignored(String),
}

/// Decode a raw payload and dispatch it
///
/// This is the transport adapter's single entry point for inbound
/// messages; it keeps the engine free of transport vocabulary.
///
/// # Example
/// ```
/// use silo_simulator_core::{handle_payload, CommandOutcome, Simulator, SimulatorConfig};
///
/// let mut silo = Simulator::new(SimulatorConfig::default());
/// let outcome = handle_payload(&mut silo, br#"{"action":"START_FILL"}"#).unwrap();
///
/// assert!(matches!(outcome, CommandOutcome::Applied(_)));
/// assert!(silo.is_filling());
/// ```
pub fn handle_payload(silo: &mut Simulator, payload: &[u8]) -> Result<CommandOutcome, CommandError> {
    let command = Command::from_slice(payload)?;
    Ok(handle_command(silo, &command))
}

/// Dispatch an already-decoded command
pub fn handle_command(silo: &mut Simulator, command: &Command) -> CommandOutcome {
    let action = match CommandAction::parse(&command.action) {
        Some(action) => action,
        None => {
            log::warn!("ignoring unknown command action: {}", command.action);
            return CommandOutcome::Ignored(command.action.clone());
        }
    };

    match action {
        CommandAction::StartFill => silo.start_fill(),
        CommandAction::StopFill => silo.stop_fill(),
        CommandAction::StartEmpty => silo.start_empty(),
        CommandAction::StopEmpty => silo.stop_empty(),
        CommandAction::SetLevel => {
            // Missing value is a no-op, not an error
            if let Some(value) = command.value {
                silo.set_level(value);
            }
        }
        CommandAction::Configure => silo.configure(command.capacity, command.hardness),
    }

    CommandOutcome::Applied(action)
}
