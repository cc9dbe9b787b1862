//! Shared application state for axum handlers.

use std::sync::Arc;

use homedeck_app::ports::EventPublisher;
use homedeck_app::services::device_service::DeviceService;
use homedeck_app::services::tip_service::TipService;

/// Application state shared across all axum handlers.
///
/// Generic over the event publisher to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<EP> {
    /// Device registry service.
    pub device_service: Arc<DeviceService<EP>>,
    /// Tip catalog service.
    pub tip_service: Arc<TipService>,
}

impl<EP> Clone for AppState<EP> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            tip_service: Arc::clone(&self.tip_service),
        }
    }
}

impl<EP: EventPublisher + 'static> AppState<EP> {
    /// Create a new application state from service instances.
    pub fn new(device_service: DeviceService<EP>, tip_service: TipService) -> Self {
        Self {
            device_service: Arc::new(device_service),
            tip_service: Arc::new(tip_service),
        }
    }
}
