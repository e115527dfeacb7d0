//! Wall-clock time for telemetry timestamps
//!
//! The engine stamps every telemetry message with milliseconds since the
//! Unix epoch. Callers never supply timestamps; the engine is the only
//! writer of the `timestamp` field.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in milliseconds since the Unix epoch
///
/// # Example
/// ```
/// use silo_simulator_core::unix_time_millis;
///
/// let now = unix_time_millis();
/// assert!(now > 0);
/// ```
pub fn unix_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
