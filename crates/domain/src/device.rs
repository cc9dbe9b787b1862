//! Device — a simulated home appliance.
//!
//! A device always has an on/off power state. Temperature-capable devices
//! (air conditioner, oven) additionally carry a [`Thermostat`]: a current
//! value plus the closed range it is clamped to. Capability is encoded
//! structurally — `thermostat: Option<Thermostat>` — so a temperature without
//! bounds (or bounds without a temperature) cannot be represented.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::DeviceId;

/// Closed integer temperature bounds, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempRange {
    pub min: i32,
    pub max: i32,
}

impl TempRange {
    /// Build a range, rejecting inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRange`] when `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Pin `value` to the nearer bound when it falls outside the range.
    #[must_use]
    pub fn clamp(self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Whether `value` lies within the range.
    #[must_use]
    pub fn contains(self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Settable temperature state of a temperature-capable device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thermostat {
    /// Current temperature, always within `range`.
    pub value: i32,
    /// Immutable clamp bounds.
    pub range: TempRange,
}

impl Thermostat {
    /// Build a thermostat, rejecting an initial value outside its range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TemperatureOutOfRange`] when `value` is
    /// outside `range`.
    pub fn new(value: i32, range: TempRange) -> Result<Self, ValidationError> {
        if !range.contains(value) {
            return Err(ValidationError::TemperatureOutOfRange {
                value,
                min: range.min,
                max: range.max,
            });
        }
        Ok(Self { value, range })
    }

    /// Apply a signed increment, clamping the result to the range.
    ///
    /// The clamp holds on every call: repeated decrements below `min` stay
    /// pinned at `min`, repeated increments above `max` stay pinned at `max`.
    pub fn adjust(&mut self, delta: i32) {
        self.value = self.range.clamp(self.value.saturating_add(delta));
    }
}

/// A simulated appliance with on/off state and an optional thermostat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Stable slug identifier, assigned at seed time.
    pub id: DeviceId,
    /// Display label.
    pub name: String,
    /// Power state.
    pub on: bool,
    /// Temperature state, present only for temperature-capable devices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermostat: Option<Thermostat>,
}

impl Device {
    /// Start building a device.
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Flip the power state. Nothing else changes; in particular the
    /// thermostat value is retained while the device is off.
    pub fn toggle(&mut self) {
        self.on = !self.on;
    }

    /// Whether this device exposes a settable temperature.
    #[must_use]
    pub fn has_temperature(&self) -> bool {
        self.thermostat.is_some()
    }

    /// Current temperature, if the device has one.
    #[must_use]
    pub fn temperature(&self) -> Option<i32> {
        self.thermostat.map(|t| t.value)
    }

    /// Apply a clamped temperature adjustment.
    ///
    /// Returns the resulting temperature, or `None` (and changes nothing)
    /// when the device has no thermostat.
    pub fn adjust_temperature(&mut self, delta: i32) -> Option<i32> {
        let thermostat = self.thermostat.as_mut()?;
        thermostat.adjust(delta);
        Some(thermostat.value)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the id or name is empty, the
    /// thermostat range is inverted, or the temperature is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if let Some(thermostat) = self.thermostat {
            // Re-run the constructor checks; fields are public so a
            // deserialized device may not have gone through them.
            TempRange::new(thermostat.range.min, thermostat.range.max)?;
            Thermostat::new(thermostat.value, thermostat.range)?;
        }
        Ok(())
    }
}

/// Builder for [`Device`], validating on [`build`](DeviceBuilder::build).
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    on: bool,
    thermostat: Option<Thermostat>,
}

impl DeviceBuilder {
    /// Set the slug identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display label.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial power state (defaults to off).
    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Give the device a thermostat.
    #[must_use]
    pub fn thermostat(mut self, thermostat: Thermostat) -> Self {
        self.thermostat = Some(thermostat);
        self
    }

    /// Finish building, checking all invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a required field is missing or an
    /// invariant fails.
    pub fn build(self) -> Result<Device, ValidationError> {
        let device = Device {
            id: self.id.ok_or(ValidationError::EmptyId)?,
            name: self.name.ok_or(ValidationError::EmptyName)?,
            on: self.on,
            thermostat: self.thermostat,
        };
        device.validate()?;
        Ok(device)
    }
}
