//! Tip — a static energy-saving advice entry.

use serde::{Deserialize, Serialize};

/// A single advice entry shown on the tips page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    /// Stable ordinal identifier (`"1"`, `"2"`, …).
    pub id: String,
    /// Short headline.
    pub title: String,
    /// Full advice text.
    pub body: String,
}

impl Tip {
    /// Convenience constructor for seed tables.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_serde_json() {
        let tip = Tip::new("1", "Save energy", "Switch appliances off when unused.");
        let json = serde_json::to_string(&tip).unwrap();
        let parsed: Tip = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tip);
    }
}
