//! JSON API handler modules.

pub mod devices;
pub mod tips;

use axum::Router;
use axum::routing::{get, post};

use homedeck_app::ports::EventPublisher;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<EP>() -> Router<AppState<EP>>
where
    EP: EventPublisher + 'static,
{
    Router::new()
        // Devices
        .route("/devices", get(devices::list::<EP>))
        .route("/devices/{id}", get(devices::get::<EP>))
        .route("/devices/{id}/toggle", post(devices::toggle::<EP>))
        .route(
            "/devices/{id}/temperature",
            post(devices::adjust_temperature::<EP>),
        )
        // Tips
        .route("/tips", get(tips::list::<EP>))
        .route("/tips/{id}", get(tips::get::<EP>))
}
