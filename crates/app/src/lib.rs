//! # homedeck-app
//!
//! Application layer — the in-memory device registry, use-case services, and
//! **port definitions** (traits).
//!
//! ## Responsibilities
//! - Hold session state: [`registry::DeviceRegistry`], the fixed ordered
//!   collection of simulated devices
//! - Provide the seed tables ([`seed`]) the registry and tip catalog start from
//! - Define the [`ports::EventPublisher`] port and an in-process
//!   implementation ([`event_bus::InProcessEventBus`])
//! - Expose use-cases as services ([`services`]) that the rendering adapter
//!   drives
//!
//! ## Dependency rule
//! Depends on `homedeck-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod event_bus;
pub mod ports;
pub mod registry;
pub mod seed;
pub mod services;
