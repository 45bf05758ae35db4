//! Client requirements model.
//!
//! `ClientRequirements` is the ephemeral per-request input to scoring and
//! cost estimation. It is constructed with builder methods, validated
//! once at the factory boundary, and never persisted.

use crate::error::StackError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const DEFAULT_TEAM_SIZE: u32 = 1;

/// Content volume tier. Drives the volume cost multiplier and the
/// volume-alignment scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentVolume {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientRequirements {
    pub budget_conscious: bool,
    pub technical_team: bool,
    pub performance_critical: bool,
    pub needs_localization: bool,
    pub collaborative_editing: bool,
    pub content_volume: ContentVolume,
    pub team_size: u32,
    /// Feature tokens the provider must carry; absence is penalized.
    pub required_features: BTreeSet<String>,
    /// Monthly sales volume in currency units, for transaction-fee
    /// estimation on e-commerce providers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_monthly_sales: Option<f64>,
}

impl Default for ClientRequirements {
    fn default() -> Self {
        Self {
            budget_conscious: false,
            technical_team: false,
            performance_critical: false,
            needs_localization: false,
            collaborative_editing: false,
            content_volume: ContentVolume::Medium,
            team_size: DEFAULT_TEAM_SIZE,
            required_features: BTreeSet::new(),
            expected_monthly_sales: None,
        }
    }
}

impl ClientRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn budget_conscious(mut self, value: bool) -> Self {
        self.budget_conscious = value;
        self
    }

    pub fn technical_team(mut self, value: bool) -> Self {
        self.technical_team = value;
        self
    }

    pub fn performance_critical(mut self, value: bool) -> Self {
        self.performance_critical = value;
        self
    }

    pub fn needs_localization(mut self, value: bool) -> Self {
        self.needs_localization = value;
        self
    }

    pub fn collaborative_editing(mut self, value: bool) -> Self {
        self.collaborative_editing = value;
        self
    }

    pub fn content_volume(mut self, volume: ContentVolume) -> Self {
        self.content_volume = volume;
        self
    }

    pub fn team_size(mut self, size: u32) -> Self {
        self.team_size = size;
        self
    }

    pub fn require_feature(mut self, feature: &str) -> Self {
        self.required_features.insert(feature.to_string());
        self
    }

    pub fn expected_monthly_sales(mut self, sales: f64) -> Self {
        self.expected_monthly_sales = Some(sales);
        self
    }

    /// Boundary validation, run before any scoring or estimation work.
    pub fn validate(&self) -> Result<(), StackError> {
        if self.team_size == 0 {
            return Err(StackError::Configuration(
                "team_size must be at least 1".to_string(),
            ));
        }
        if let Some(sales) = self.expected_monthly_sales {
            if !sales.is_finite() || sales < 0.0 {
                return Err(StackError::Configuration(format!(
                    "expected_monthly_sales must be finite and non-negative, got {sales}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let reqs = ClientRequirements::default();
        assert_eq!(reqs.team_size, 1);
        assert_eq!(reqs.content_volume, ContentVolume::Medium);
        assert!(!reqs.budget_conscious);
        assert!(reqs.required_features.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let reqs = ClientRequirements::new()
            .budget_conscious(true)
            .technical_team(true)
            .content_volume(ContentVolume::Large)
            .team_size(5)
            .require_feature("visual_editing");
        assert!(reqs.budget_conscious);
        assert_eq!(reqs.team_size, 5);
        assert!(reqs.required_features.contains("visual_editing"));
    }

    #[test]
    fn test_validate_rejects_zero_team() {
        let reqs = ClientRequirements::new().team_size(0);
        assert!(matches!(
            reqs.validate(),
            Err(StackError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_sales() {
        let reqs = ClientRequirements::new().expected_monthly_sales(-10.0);
        assert!(reqs.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(ClientRequirements::default().validate().is_ok());
    }

    #[test]
    fn test_serde_partial_input_uses_defaults() {
        let reqs: ClientRequirements =
            serde_json::from_str(r#"{"budget_conscious": true, "team_size": 3}"#).unwrap();
        assert!(reqs.budget_conscious);
        assert_eq!(reqs.team_size, 3);
        assert_eq!(reqs.content_volume, ContentVolume::Medium);
    }
}
