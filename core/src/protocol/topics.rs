//! MQTT topic layout
//!
//! Topics are hierarchical strings with `/`-joined segments:
//!
//! - Telemetry: `<namespace>/device/<device_id>/data`
//! - Commands:  `<namespace>/device/<device_id>/command`
//!
//! Observers monitoring every device subscribe with a single-level
//! wildcard on the device segment.

/// Default topic namespace used by the demo deployment
pub const DEFAULT_NAMESPACE: &str = "energic-test-user";

/// Default device identifier
pub const DEFAULT_DEVICE_ID: &str = "silo-01";

/// Topic pair for one device
///
/// # Example
/// ```
/// use silo_simulator_core::DeviceTopics;
///
/// let topics = DeviceTopics::new("energic-test-user", "silo-01");
/// assert_eq!(topics.data(), "energic-test-user/device/silo-01/data");
/// assert_eq!(topics.command(), "energic-test-user/device/silo-01/command");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceTopics {
    namespace: String,
    device_id: String,
}

impl DeviceTopics {
    pub fn new(namespace: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            device_id: device_id.into(),
        }
    }

    /// Telemetry topic for this device
    pub fn data(&self) -> String {
        format!("{}/device/{}/data", self.namespace, self.device_id)
    }

    /// Command topic for this device
    pub fn command(&self) -> String {
        format!("{}/device/{}/command", self.namespace, self.device_id)
    }

    /// Telemetry subscription matching every device in a namespace
    pub fn data_wildcard(namespace: &str) -> String {
        format!("{}/device/+/data", namespace)
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}
