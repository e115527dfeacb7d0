//! Command message schema
//!
//! Commands are UTF-8 JSON: `{ "action": "...", "value"?, "capacity"?,
//! "hardness"? }`. The `action` field travels as a free-form string so
//! that a payload carrying an action this build does not know still
//! decodes cleanly — unknown actions are a defined no-op, not a decode
//! failure. `CommandAction` is the typed view of the strings this build
//! does know.

use serde::{Deserialize, Serialize};

/// Wire form of an inbound command
///
/// `value` is meaningful only for SET_LEVEL (a percentage target in
/// [0, 100]); `capacity` and `hardness` only for CONFIGURE. Absent
/// optional fields are omitted from the encoded payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Action name, e.g. "START_FILL"
    pub action: String,

    /// SET_LEVEL percentage target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// CONFIGURE: new capacity (liters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,

    /// CONFIGURE: new material hardness
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardness: Option<f64>,
}

impl Command {
    /// Decode from a raw payload
    pub fn from_slice(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }

    /// Encode to the JSON wire form
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn bare(action: CommandAction) -> Self {
        Self {
            action: action.as_str().to_string(),
            value: None,
            capacity: None,
            hardness: None,
        }
    }

    pub fn start_fill() -> Self {
        Self::bare(CommandAction::StartFill)
    }

    pub fn stop_fill() -> Self {
        Self::bare(CommandAction::StopFill)
    }

    pub fn start_empty() -> Self {
        Self::bare(CommandAction::StartEmpty)
    }

    pub fn stop_empty() -> Self {
        Self::bare(CommandAction::StopEmpty)
    }

    pub fn set_level(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::bare(CommandAction::SetLevel)
        }
    }

    pub fn configure(capacity: Option<f64>, hardness: Option<f64>) -> Self {
        Self {
            capacity,
            hardness,
            ..Self::bare(CommandAction::Configure)
        }
    }
}

/// Typed view of the known action strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    StartFill,
    StopFill,
    StartEmpty,
    StopEmpty,
    SetLevel,
    Configure,
}

impl CommandAction {
    /// Parse a wire action string; `None` means unknown action
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "START_FILL" => Some(Self::StartFill),
            "STOP_FILL" => Some(Self::StopFill),
            "START_EMPTY" => Some(Self::StartEmpty),
            "STOP_EMPTY" => Some(Self::StopEmpty),
            "SET_LEVEL" => Some(Self::SetLevel),
            "CONFIGURE" => Some(Self::Configure),
            _ => None,
        }
    }

    /// Wire spelling of this action
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartFill => "START_FILL",
            Self::StopFill => "STOP_FILL",
            Self::StartEmpty => "START_EMPTY",
            Self::StopEmpty => "STOP_EMPTY",
            Self::SetLevel => "SET_LEVEL",
            Self::Configure => "CONFIGURE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_action() {
        let actions = [
            CommandAction::StartFill,
            CommandAction::StopFill,
            CommandAction::StartEmpty,
            CommandAction::StopEmpty,
            CommandAction::SetLevel,
            CommandAction::Configure,
        ];

        for action in actions {
            assert_eq!(CommandAction::parse(action.as_str()), Some(action));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(CommandAction::parse("start_fill"), None);
        assert_eq!(CommandAction::parse("FOO"), None);
        assert_eq!(CommandAction::parse(""), None);
    }

    #[test]
    fn test_decode_with_unknown_action_succeeds() {
        // Unknown actions are a dispatch no-op, not a decode failure
        let command = Command::from_slice(br#"{"action":"SELF_DESTRUCT"}"#).unwrap();
        assert_eq!(command.action, "SELF_DESTRUCT");
        assert_eq!(CommandAction::parse(&command.action), None);
    }

    #[test]
    fn test_encode_omits_absent_fields() {
        let json = Command::start_fill().to_json().unwrap();
        assert_eq!(json, r#"{"action":"START_FILL"}"#);
    }

    #[test]
    fn test_set_level_carries_value() {
        let json = Command::set_level(50.0).to_json().unwrap();
        let decoded = Command::from_slice(json.as_bytes()).unwrap();

        assert_eq!(decoded.action, "SET_LEVEL");
        assert_eq!(decoded.value, Some(50.0));
    }
}
