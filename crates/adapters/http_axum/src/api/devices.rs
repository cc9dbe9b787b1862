//! JSON handlers for devices.
//!
//! Mutations on unknown ids never touch state; the API answers 404 as a
//! boundary diagnostic while the registry itself treats them as no-ops.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use homedeck_app::ports::EventPublisher;
use homedeck_domain::device::Device;
use homedeck_domain::error::{HomeDeckError, NotFoundError};
use homedeck_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for a temperature adjustment.
#[derive(Debug, Deserialize)]
pub struct AdjustTemperatureRequest {
    /// Signed increment; any integer is accepted, the result is clamped.
    pub delta: i32,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the single-device endpoints.
pub enum DeviceResponse {
    Ok(Json<Device>),
}

impl IntoResponse for DeviceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn not_found(entity: &'static str, id: &DeviceId) -> ApiError {
    ApiError::from(HomeDeckError::NotFound(NotFoundError {
        entity,
        id: id.to_string(),
    }))
}

/// `GET /api/devices`
pub async fn list<EP>(State(state): State<AppState<EP>>) -> ListResponse
where
    EP: EventPublisher + 'static,
{
    ListResponse::Ok(Json(state.device_service.list_devices()))
}

/// `GET /api/devices/{id}`
pub async fn get<EP>(
    State(state): State<AppState<EP>>,
    Path(id): Path<String>,
) -> Result<DeviceResponse, ApiError>
where
    EP: EventPublisher + 'static,
{
    let device = state.device_service.get_device(&DeviceId::new(id))?;
    Ok(DeviceResponse::Ok(Json(device)))
}

/// `POST /api/devices/{id}/toggle`
pub async fn toggle<EP>(
    State(state): State<AppState<EP>>,
    Path(id): Path<String>,
) -> Result<DeviceResponse, ApiError>
where
    EP: EventPublisher + 'static,
{
    let id = DeviceId::new(id);
    match state.device_service.toggle_device(&id).await? {
        Some(device) => Ok(DeviceResponse::Ok(Json(device))),
        None => Err(not_found("Device", &id)),
    }
}

/// `POST /api/devices/{id}/temperature`
pub async fn adjust_temperature<EP>(
    State(state): State<AppState<EP>>,
    Path(id): Path<String>,
    Json(req): Json<AdjustTemperatureRequest>,
) -> Result<DeviceResponse, ApiError>
where
    EP: EventPublisher + 'static,
{
    let id = DeviceId::new(id);
    match state
        .device_service
        .adjust_temperature(&id, req.delta)
        .await?
    {
        Some(device) => Ok(DeviceResponse::Ok(Json(device))),
        None => {
            // A registry no-op covers two cases. Re-read to tell an unknown
            // device apart from one that simply has no thermostat.
            state.device_service.get_device(&id)?;
            Err(not_found("Thermostat", &id))
        }
    }
}
