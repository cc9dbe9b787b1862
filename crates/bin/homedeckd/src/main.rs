//! # homedeckd — homedeck daemon
//!
//! Composition root that wires the registry, services, and HTTP adapter
//! together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Seed the in-memory device registry and tip catalog
//! - Construct application services, injecting the event bus via its port
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve, with graceful shutdown on ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use homedeck_adapter_http_axum::state::AppState;
use homedeck_app::event_bus::InProcessEventBus;
use homedeck_app::registry::DeviceRegistry;
use homedeck_app::services::device_service::DeviceService;
use homedeck_app::services::tip_service::TipService;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Event bus, with a logging subscriber so every state change shows up
    // in the daemon output.
    let event_bus = InProcessEventBus::new(256);
    spawn_event_logger(&event_bus);

    // Session state and services.
    let registry = DeviceRegistry::with_default_devices();
    let device_service = DeviceService::new(registry, event_bus);
    let tip_service = TipService::with_default_tips();

    // HTTP
    let state = AppState::new(device_service, tip_service);
    let app = homedeck_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "homedeckd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Spawn a task that traces every published device event.
fn spawn_event_logger(bus: &InProcessEventBus) {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            tracing::info!(
                device_id = %event.device_id,
                kind = ?event.kind,
                "device state changed"
            );
        }
    });
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
    }
    tracing::info!("shutting down");
}
