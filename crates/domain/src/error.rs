//! Common error types used across the workspace.
//!
//! Each layer defines typed errors and converts via `#[from]`. Unknown ids on
//! *mutations* are deliberately not errors — the registry treats them as
//! silent no-ops, since every valid id comes from the same fixed seed table
//! that drives the interface. `NotFoundError` exists for the read surface
//! (API lookups) only.

/// Top-level error for the homedeck workspace.
#[derive(Debug, thiserror::Error)]
pub enum HomeDeckError {
    /// A domain invariant was violated at construction time.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced resource does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// Construction-time invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A device id must be a non-empty slug.
    #[error("device id must not be empty")]
    EmptyId,

    /// A device name must not be empty.
    #[error("device name must not be empty")]
    EmptyName,

    /// Temperature bounds with `min > max`.
    #[error("invalid temperature range: min {min} exceeds max {max}")]
    InvalidRange { min: i32, max: i32 },

    /// An initial temperature outside its declared bounds.
    #[error("temperature {value} outside range [{min}, {max}]")]
    TemperatureOutOfRange { value: i32, min: i32, max: i32 },

    /// Two seed entries with the same id.
    #[error("duplicate device id: {0}")]
    DuplicateDeviceId(String),
}

/// A resource lookup that found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Kind of resource (`"Device"`, `"Tip"`).
    pub entity: &'static str,
    /// The id that was looked up.
    pub id: String,
}
