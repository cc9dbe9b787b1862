//! The device registry — the fixed, ordered collection of simulated devices
//! held for the lifetime of the session.
//!
//! The registry is seeded once at startup; entries are never added or removed
//! afterwards, and only the `on` and thermostat value fields ever mutate, in
//! place. Vec order is display order and is preserved across mutations.
//!
//! Mutations addressed at an unknown id (or a temperature adjustment on a
//! device without a thermostat) are silent no-ops: every valid id originates
//! from the same seed table that drives the interface, so there is no path by
//! which a user can construct an invalid one. Callers get `None` back so the
//! surface layer can still emit a diagnostic if it wants to.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use homedeck_domain::device::Device;
use homedeck_domain::error::ValidationError;
use homedeck_domain::id::DeviceId;

/// In-memory, ordered device collection with in-place mutation.
pub struct DeviceRegistry {
    devices: Mutex<Vec<Device>>,
}

/// Outcome of a successful temperature adjustment.
///
/// Captured under the same lock as the mutation, so `previous` is exactly
/// the value the clamped result was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureAdjustment {
    /// Temperature before the adjustment.
    pub previous: i32,
    /// Updated device snapshot.
    pub device: Device,
}

impl DeviceRegistry {
    /// Seed the registry with a fixed device list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateDeviceId`] when two entries share
    /// an id, or any invariant failure reported by [`Device::validate`].
    pub fn new(devices: Vec<Device>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for device in &devices {
            device.validate()?;
            if !seen.insert(device.id.clone()) {
                return Err(ValidationError::DuplicateDeviceId(device.id.to_string()));
            }
        }
        Ok(Self {
            devices: Mutex::new(devices),
        })
    }

    /// Seed the registry with the default five-device table.
    #[must_use]
    pub fn with_default_devices() -> Self {
        // The seed table is a fixed literal; it always validates.
        match Self::new(crate::seed::devices()) {
            Ok(registry) => registry,
            Err(err) => unreachable!("default seed table failed validation: {err}"),
        }
    }

    /// Ordered clone of the current device list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Device> {
        self.lock().clone()
    }

    /// Look up a single device by id.
    #[must_use]
    pub fn get(&self, id: &DeviceId) -> Option<Device> {
        self.lock().iter().find(|d| &d.id == id).cloned()
    }

    /// Flip the power state of the device with `id`.
    ///
    /// Returns the updated device, or `None` (state untouched) when the id is
    /// unknown. All other fields and all other devices are unchanged; the
    /// thermostat value is retained across off/on cycles.
    pub fn toggle(&self, id: &DeviceId) -> Option<Device> {
        let mut devices = self.lock();
        let device = devices.iter_mut().find(|d| &d.id == id)?;
        device.toggle();
        Some(device.clone())
    }

    /// Apply a clamped temperature adjustment to the device with `id`.
    ///
    /// Returns the previous value together with the updated device, or
    /// `None` (state untouched) when the id is unknown or the device has no
    /// thermostat. Only the targeted device's temperature changes.
    pub fn adjust_temperature(&self, id: &DeviceId, delta: i32) -> Option<TemperatureAdjustment> {
        let mut devices = self.lock();
        let device = devices.iter_mut().find(|d| &d.id == id)?;
        let previous = device.temperature()?;
        device.adjust_temperature(delta)?;
        Some(TemperatureAdjustment {
            previous,
            device: device.clone(),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Device>> {
        // Mutations are plain field writes; a panic mid-update cannot leave
        // the list half-mutated, so a poisoned lock is safe to recover.
        self.devices.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::with_default_devices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedeck_domain::device::{TempRange, Thermostat};

    fn registry() -> DeviceRegistry {
        DeviceRegistry::with_default_devices()
    }

    fn ids(registry: &DeviceRegistry) -> Vec<String> {
        registry
            .snapshot()
            .into_iter()
            .map(|d| d.id.to_string())
            .collect()
    }

    #[test]
    fn should_seed_five_devices_in_display_order() {
        let registry = registry();
        assert_eq!(ids(&registry), ["ac", "fridge", "oven", "washer", "tv"]);
    }

    #[test]
    fn should_reject_duplicate_ids() {
        let devices = vec![
            Device::builder().id("tv").name("TV").build().unwrap(),
            Device::builder().id("tv").name("Second TV").build().unwrap(),
        ];
        let result = DeviceRegistry::new(devices);
        assert_eq!(
            result.err(),
            Some(ValidationError::DuplicateDeviceId("tv".to_string()))
        );
    }

    #[test]
    fn should_reject_invalid_seed_entry() {
        let devices = vec![Device {
            id: DeviceId::from("oven"),
            name: "Oven".to_string(),
            on: false,
            thermostat: Some(Thermostat {
                value: 400,
                range: TempRange { min: 100, max: 250 },
            }),
        }];
        assert!(DeviceRegistry::new(devices).is_err());
    }

    #[test]
    fn should_toggle_only_the_targeted_device() {
        let registry = registry();
        let before = registry.snapshot();

        let updated = registry.toggle(&DeviceId::from("tv")).unwrap();
        assert!(updated.on);

        for (old, new) in before.iter().zip(registry.snapshot().iter()) {
            if new.id == DeviceId::from("tv") {
                assert_eq!(new.on, !old.on);
                assert_eq!(new.thermostat, old.thermostat);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn should_restore_state_after_double_toggle() {
        let registry = registry();
        let before = registry.snapshot();
        for device in &before {
            registry.toggle(&device.id);
            registry.toggle(&device.id);
        }
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn should_toggle_fridge_off_then_back_on() {
        let registry = registry();
        let fridge = DeviceId::from("fridge");
        assert!(registry.get(&fridge).unwrap().on);

        assert!(!registry.toggle(&fridge).unwrap().on);
        assert!(registry.toggle(&fridge).unwrap().on);
    }

    #[test]
    fn should_clamp_after_twenty_increments_on_the_ac() {
        let registry = registry();
        let ac = DeviceId::from("ac");
        assert_eq!(registry.get(&ac).unwrap().temperature(), Some(22));

        for _ in 0..20 {
            registry.adjust_temperature(&ac, 1);
        }
        assert_eq!(registry.get(&ac).unwrap().temperature(), Some(30));
    }

    #[test]
    fn should_keep_temperature_within_range_for_any_sequence() {
        let registry = registry();
        let oven = DeviceId::from("oven");
        for delta in [50, 50, 50, -1000, 3, 999, -7, 0] {
            registry.adjust_temperature(&oven, delta);
            let device = registry.get(&oven).unwrap();
            let thermostat = device.thermostat.unwrap();
            assert!(thermostat.range.contains(thermostat.value));
        }
    }

    #[test]
    fn should_report_previous_value_with_the_update() {
        let registry = registry();
        let ac = DeviceId::from("ac");

        let adjustment = registry.adjust_temperature(&ac, 3).unwrap();
        assert_eq!(adjustment.previous, 22);
        assert_eq!(adjustment.device.temperature(), Some(25));

        // Pinned at the bound: previous and updated value coincide.
        let adjustment = registry.adjust_temperature(&ac, 100).unwrap();
        assert_eq!(adjustment.previous, 25);
        assert_eq!(adjustment.device.temperature(), Some(30));
        let adjustment = registry.adjust_temperature(&ac, 1).unwrap();
        assert_eq!(adjustment.previous, 30);
        assert_eq!(adjustment.device.temperature(), Some(30));
    }

    #[test]
    fn should_ignore_adjustment_on_device_without_thermostat() {
        let registry = registry();
        let before = registry.snapshot();
        assert!(
            registry
                .adjust_temperature(&DeviceId::from("washer"), 5)
                .is_none()
        );
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn should_ignore_toggle_with_unknown_id() {
        let registry = registry();
        let before = registry.snapshot();
        assert!(registry.toggle(&DeviceId::from("boiler")).is_none());
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn should_ignore_adjustment_with_unknown_id() {
        let registry = registry();
        let before = registry.snapshot();
        assert!(
            registry
                .adjust_temperature(&DeviceId::from("boiler"), 1)
                .is_none()
        );
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn should_preserve_order_across_mixed_mutations() {
        let registry = registry();
        let order = ids(&registry);

        registry.toggle(&DeviceId::from("oven"));
        registry.adjust_temperature(&DeviceId::from("oven"), 10);
        registry.toggle(&DeviceId::from("fridge"));
        registry.adjust_temperature(&DeviceId::from("ac"), -3);
        registry.toggle(&DeviceId::from("unknown"));

        assert_eq!(ids(&registry), order);
    }

    #[test]
    fn should_retain_temperature_while_device_is_off() {
        let registry = registry();
        let ac = DeviceId::from("ac");

        registry.toggle(&ac);
        registry.adjust_temperature(&ac, 4);
        registry.toggle(&ac);
        assert_eq!(registry.get(&ac).unwrap().temperature(), Some(26));
    }
}
