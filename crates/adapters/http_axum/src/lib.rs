//! # homedeck-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for programmatic access
//!   (`/api/devices`, `/api/tips`, …)
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript** — pure HTML forms + `<meta http-equiv="refresh">`
//!   for passive updates
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML.
//! - Interactive controls (power switch, temperature −/+) are `<form>`
//!   elements that POST back to the server and redirect (PRG pattern).
//! - Pages auto-reload via `<meta http-equiv="refresh">`.
//!
//! ## Dependency rule
//! Depends on `homedeck-app` (for port traits and services) and
//! `homedeck-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
