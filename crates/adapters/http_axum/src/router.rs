//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use homedeck_app::ports::EventPublisher;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and dashboard routes at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<EP>(state: AppState<EP>) -> Router
where
    EP: EventPublisher + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use homedeck_app::registry::DeviceRegistry;
    use homedeck_app::services::device_service::DeviceService;
    use homedeck_app::services::tip_service::TipService;
    use homedeck_domain::error::HomeDeckError;
    use homedeck_domain::event::DeviceEvent;
    use tower::ServiceExt;

    struct StubPublisher;

    impl EventPublisher for StubPublisher {
        async fn publish(&self, _event: DeviceEvent) -> Result<(), HomeDeckError> {
            Ok(())
        }
    }

    fn test_state() -> AppState<StubPublisher> {
        AppState::new(
            DeviceService::new(DeviceRegistry::with_default_devices(), StubPublisher),
            TipService::with_default_tips(),
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_the_device_dashboard_at_root() {
        let app = build(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = String::from_utf8(
            response
                .into_body()
                .collect()
                .await
                .unwrap()
                .to_bytes()
                .to_vec(),
        )
        .unwrap();
        assert!(body.contains("Air Conditioner"));
    }

    #[tokio::test]
    async fn should_serve_the_json_device_list() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/devices")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
