//! # homedeck-domain
//!
//! Pure domain model for the homedeck appliance-control demo.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, error conventions, timestamps
//! - Define **Devices** (simulated appliances with on/off state and an
//!   optional clamped thermostat)
//! - Define **Tips** (static energy-saving advice entries)
//! - Define **Events** (state-change records)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod event;
pub mod tip;
