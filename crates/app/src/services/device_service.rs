//! Device service — use-cases for reading and mutating the device registry.

use homedeck_domain::device::Device;
use homedeck_domain::error::{HomeDeckError, NotFoundError};
use homedeck_domain::event::{DeviceEvent, DeviceEventKind};
use homedeck_domain::id::DeviceId;

use crate::ports::EventPublisher;
use crate::registry::{DeviceRegistry, TemperatureAdjustment};

/// Application service for the device registry.
///
/// Mutations publish a [`DeviceEvent`] after a successful in-place change.
/// Unknown ids and out-of-capability adjustments are no-ops (see the
/// [`registry`](crate::registry) module doc); the service traces a debug
/// diagnostic for them and returns `Ok(None)` without touching state.
pub struct DeviceService<P> {
    registry: DeviceRegistry,
    publisher: P,
}

impl<P: EventPublisher> DeviceService<P> {
    /// Create a new service around a seeded registry.
    pub fn new(registry: DeviceRegistry, publisher: P) -> Self {
        Self {
            registry,
            publisher,
        }
    }

    /// Ordered snapshot of all devices.
    #[must_use]
    pub fn list_devices(&self) -> Vec<Device> {
        self.registry.snapshot()
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::NotFound`] when no device with `id` exists.
    pub fn get_device(&self, id: &DeviceId) -> Result<Device, HomeDeckError> {
        self.registry.get(id).ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Flip a device's power state.
    ///
    /// Returns the updated device, or `Ok(None)` when the id is unknown
    /// (state untouched).
    ///
    /// # Errors
    ///
    /// Propagates a publisher error; the state change itself cannot fail.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_device(&self, id: &DeviceId) -> Result<Option<Device>, HomeDeckError> {
        let Some(device) = self.registry.toggle(id) else {
            tracing::debug!(device_id = %id, "toggle for unknown device id, ignoring");
            return Ok(None);
        };

        self.publisher
            .publish(DeviceEvent::new(
                device.id.clone(),
                DeviceEventKind::PowerChanged { on: device.on },
            ))
            .await?;
        Ok(Some(device))
    }

    /// Apply a clamped temperature adjustment.
    ///
    /// Returns the updated device, or `Ok(None)` when the id is unknown or
    /// the device has no thermostat (state untouched). A
    /// [`DeviceEventKind::TemperatureChanged`] event is published only when
    /// the value actually moved — adjusts pinned at a bound are value-wise
    /// no-ops.
    ///
    /// # Errors
    ///
    /// Propagates a publisher error; the state change itself cannot fail.
    #[tracing::instrument(skip(self))]
    pub async fn adjust_temperature(
        &self,
        id: &DeviceId,
        delta: i32,
    ) -> Result<Option<Device>, HomeDeckError> {
        let Some(TemperatureAdjustment { previous, device }) =
            self.registry.adjust_temperature(id, delta)
        else {
            tracing::debug!(
                device_id = %id,
                delta,
                "temperature adjustment for unknown or capability-less device, ignoring"
            );
            return Ok(None);
        };

        // `previous` comes from the same lock as the mutation, so the event
        // always describes exactly the change that happened.
        if let Some(to) = device.temperature()
            && to != previous
        {
            self.publisher
                .publish(DeviceEvent::new(
                    device.id.clone(),
                    DeviceEventKind::TemperatureChanged { from: previous, to },
                ))
                .await?;
        }
        Ok(Some(device))
    }
}
