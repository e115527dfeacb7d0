//! Telemetry message schema
//!
//! One telemetry message is published per tick, reflecting the silo state
//! after that tick's integration step. Messages are UTF-8 JSON with
//! camelCase field names; numbers are plain decimals, booleans are literal
//! true/false. No framing, no compression, no version field.
//!
//! # Delivery semantics
//!
//! Telemetry rides QoS 0 — fire-and-forget. Out-of-order arrival is
//! possible; consumers treat each message as the authoritative current
//! state (last-write-wins by arrival order, not by `timestamp`).

use serde::{Deserialize, Serialize};

/// Snapshot of silo state broadcast to observers
///
/// # Example
/// ```
/// use silo_simulator_core::Telemetry;
///
/// let json = r#"{
///     "level": 5000.0,
///     "percentage": 50.0,
///     "capacity": 10000.0,
///     "isFilling": true,
///     "isEmptying": false,
///     "hardness": 50.0,
///     "timestamp": 1756100000000
/// }"#;
///
/// let t = Telemetry::from_slice(json.as_bytes()).unwrap();
/// assert_eq!(t.level, 5000.0);
/// assert!(t.is_filling);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Telemetry {
    /// Volume currently held (liters)
    pub level: f64,

    /// Derived fill ratio: `100 * level / capacity` (0 when capacity is 0)
    pub percentage: f64,

    /// Maximum holdable volume (liters)
    pub capacity: f64,

    /// Inflow valve state
    pub is_filling: bool,

    /// Outflow valve state
    pub is_emptying: bool,

    /// Material hardness in [0, 100]; rendering hint only
    pub hardness: f64,

    /// Milliseconds since Unix epoch at the tick that produced this message
    pub timestamp: u64,
}

impl Telemetry {
    /// Encode to the JSON wire form
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode from a raw payload (observer side)
    pub fn from_slice(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }
}
