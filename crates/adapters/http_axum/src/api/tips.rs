//! JSON handlers for the tip catalog.

use axum::Json;
use axum::extract::{Path, State};

use homedeck_app::ports::EventPublisher;
use homedeck_domain::tip::Tip;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/tips`
pub async fn list<EP>(State(state): State<AppState<EP>>) -> Json<Vec<Tip>>
where
    EP: EventPublisher + 'static,
{
    Json(state.tip_service.list_tips().to_vec())
}

/// `GET /api/tips/{id}`
pub async fn get<EP>(
    State(state): State<AppState<EP>>,
    Path(id): Path<String>,
) -> Result<Json<Tip>, ApiError>
where
    EP: EventPublisher + 'static,
{
    let tip = state.tip_service.get_tip(&id)?;
    Ok(Json(tip.clone()))
}
