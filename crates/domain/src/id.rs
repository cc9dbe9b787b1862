//! Device identifiers.
//!
//! Ids are short, stable slugs fixed at seed time (`ac`, `fridge`, `oven`,
//! `washer`, `tv`) rather than generated values, so they double as URL path
//! segments and form targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Device`](crate::device::Device).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Wrap a slug string.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Access the inner slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the slug is empty (invalid).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl FromStr for DeviceId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compare_equal_for_same_slug() {
        assert_eq!(DeviceId::from("ac"), DeviceId::new("ac"));
        assert_ne!(DeviceId::from("ac"), DeviceId::from("tv"));
    }

    #[test]
    fn should_display_the_raw_slug() {
        assert_eq!(DeviceId::from("fridge").to_string(), "fridge");
    }

    #[test]
    fn should_serialize_as_a_plain_string() {
        let json = serde_json::to_string(&DeviceId::from("oven")).unwrap();
        assert_eq!(json, "\"oven\"");
        let parsed: DeviceId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DeviceId::from("oven"));
    }

    #[test]
    fn should_report_empty_slug() {
        assert!(DeviceId::new("").is_empty());
        assert!(!DeviceId::new("tv").is_empty());
    }
}
