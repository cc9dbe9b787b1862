//! Event publishing port.

use std::future::Future;

use homedeck_domain::error::HomeDeckError;
use homedeck_domain::event::DeviceEvent;

/// Sink for device state-change events.
///
/// The in-process implementation lives in
/// [`event_bus`](crate::event_bus::InProcessEventBus); tests provide stubs.
pub trait EventPublisher: Send + Sync {
    /// Publish a single event. Must succeed even with no listeners.
    fn publish(
        &self,
        event: DeviceEvent,
    ) -> impl Future<Output = Result<(), HomeDeckError>> + Send;
}
