//! Environment-driven startup configuration
//!
//! Every knob has a documented default matching the demo deployment, so a
//! bare `silo-sensor` run connects to the public broker and starts
//! publishing. Invalid numeric values fail startup with a typed error
//! rather than silently falling back.
//!
//! Parsing is a pure function over a key-lookup closure; tests feed it a
//! map instead of mutating the process environment.

use silo_simulator_core::protocol::topics::{DEFAULT_DEVICE_ID, DEFAULT_NAMESPACE};
use silo_simulator_core::{DeviceTopics, SimulatorConfig};
use std::fmt::Debug;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {variable}: {value:?}")]
    Invalid { variable: &'static str, value: String },
}

/// Complete sensor daemon configuration
///
/// # Example
/// ```
/// use silo_sensor::SensorConfig;
///
/// let config = SensorConfig::from_lookup(|_| None).unwrap();
/// assert_eq!(config.device_id, "silo-01");
/// assert_eq!(config.tick_millis, 100);
/// ```
#[derive(Debug, Clone)]
pub struct SensorConfig {
    /// MQTT broker host (`BROKER_HOST`)
    pub broker_host: String,

    /// MQTT broker TCP port (`BROKER_PORT`)
    pub broker_port: u16,

    /// Device identifier, also used as the MQTT client id (`DEVICE_ID`)
    pub device_id: String,

    /// Topic namespace prefix (`TOPIC_PREFIX`)
    pub topic_prefix: String,

    /// Tick period in milliseconds (`TICK_MILLIS`)
    pub tick_millis: u64,

    /// Liters per tick while filling (`FILL_RATE`)
    pub fill_rate: f64,

    /// Liters per tick while emptying (`EMPTY_RATE`)
    pub empty_rate: f64,

    /// Noise amplitude (`NOISE`)
    pub noise: f64,

    /// Initial capacity in liters (`CAPACITY`)
    pub capacity: f64,

    /// Broker credentials (`MQTT_USERNAME` / `MQTT_PASSWORD`); the demo
    /// broker accepts any pair
    pub username: String,
    pub password: String,
}

impl SensorConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            broker_host: string_var(&lookup, "BROKER_HOST", "broker.emqx.io"),
            broker_port: parsed_var(&lookup, "BROKER_PORT", 1883)?,
            device_id: string_var(&lookup, "DEVICE_ID", DEFAULT_DEVICE_ID),
            topic_prefix: string_var(&lookup, "TOPIC_PREFIX", DEFAULT_NAMESPACE),
            tick_millis: parsed_var(&lookup, "TICK_MILLIS", 100)?,
            fill_rate: parsed_var(&lookup, "FILL_RATE", 20.0)?,
            empty_rate: parsed_var(&lookup, "EMPTY_RATE", 15.0)?,
            noise: parsed_var(&lookup, "NOISE", 0.5)?,
            capacity: parsed_var(&lookup, "CAPACITY", 10_000.0)?,
            username: string_var(&lookup, "MQTT_USERNAME", "sensor"),
            password: string_var(&lookup, "MQTT_PASSWORD", "password"),
        })
    }

    /// Topic pair for this device
    pub fn topics(&self) -> DeviceTopics {
        DeviceTopics::new(self.topic_prefix.clone(), self.device_id.clone())
    }

    /// Engine configuration derived from this daemon configuration
    pub fn simulator_config(&self, rng_seed: u64) -> SimulatorConfig {
        SimulatorConfig {
            capacity: self.capacity,
            level: 0.0,
            fill_rate: self.fill_rate,
            empty_rate: self.empty_rate,
            noise: self.noise,
            rng_seed,
        }
    }
}

fn string_var(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn parsed_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            variable: key,
            value: raw,
        }),
    }
}
