//! Event — an immutable record of a device state change.
//!
//! Events are observability records published after a successful mutation;
//! no behaviour depends on them.

use serde::Serialize;

use crate::id::DeviceId;
use crate::time::Timestamp;

/// What changed on a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceEventKind {
    /// The power state flipped.
    PowerChanged { on: bool },
    /// The thermostat moved to a new value.
    TemperatureChanged { from: i32, to: i32 },
}

/// A state-change record for a single device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceEvent {
    /// The device that changed.
    pub device_id: DeviceId,
    /// What changed.
    pub kind: DeviceEventKind,
    /// When the change happened.
    pub timestamp: Timestamp,
}

impl DeviceEvent {
    /// Build an event stamped with the current time.
    #[must_use]
    pub fn new(device_id: DeviceId, kind: DeviceEventKind) -> Self {
        Self {
            device_id,
            kind,
            timestamp: crate::time::now(),
        }
    }
}
