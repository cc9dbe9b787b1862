//! Tip service — read-only access to the energy-saving tip catalog.

use homedeck_domain::error::{HomeDeckError, NotFoundError};
use homedeck_domain::tip::Tip;

/// Application service for the static tip catalog.
pub struct TipService {
    tips: Vec<Tip>,
}

impl TipService {
    /// Create a service over a fixed tip list.
    #[must_use]
    pub fn new(tips: Vec<Tip>) -> Self {
        Self { tips }
    }

    /// Create a service over the default ten-tip catalog.
    #[must_use]
    pub fn with_default_tips() -> Self {
        Self::new(crate::seed::tips())
    }

    /// All tips, in display order.
    #[must_use]
    pub fn list_tips(&self) -> &[Tip] {
        &self.tips
    }

    /// Look up a tip by id.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDeckError::NotFound`] when no tip with `id` exists.
    pub fn get_tip(&self, id: &str) -> Result<&Tip, HomeDeckError> {
        self.tips.iter().find(|t| t.id == id).ok_or_else(|| {
            NotFoundError {
                entity: "Tip",
                id: id.to_string(),
            }
            .into()
        })
    }
}

impl Default for TipService {
    fn default() -> Self {
        Self::with_default_tips()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_ten_default_tips_in_order() {
        let svc = TipService::with_default_tips();
        let tips = svc.list_tips();
        assert_eq!(tips.len(), 10);
        let ids: Vec<_> = tips.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn should_get_tip_by_id() {
        let svc = TipService::with_default_tips();
        let tip = svc.get_tip("3").unwrap();
        assert_eq!(tip.title, "Optimal fridge temperature");
    }

    #[test]
    fn should_return_not_found_for_unknown_tip() {
        let svc = TipService::with_default_tips();
        let result = svc.get_tip("99");
        assert!(matches!(result, Err(HomeDeckError::NotFound(_))));
    }
}
