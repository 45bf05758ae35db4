//! Provider descriptor model.
//!
//! A `ProviderDescriptor` is immutable catalog data describing one CMS or
//! e-commerce provider: cost ranges, the engines it integrates with, its
//! feature surface, and how its content is delivered. Descriptors are
//! built once (catalog defaults or runtime registration) and read-only
//! afterwards.

use crate::{EngineId, ProviderId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Whether a provider serves content or commerce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderCategory {
    Cms,
    Ecommerce,
}

/// Integration effort tier, used by scoring and maintenance-cost lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupComplexity {
    Low,
    Medium,
    High,
}

/// How the provider delivers content into a build.
///
/// Git-based providers commit content into the repository; API-driven
/// providers serve it from a hosted backend at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentApi {
    GitBased,
    ApiDriven,
}

/// Inclusive currency range. Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
}

impl CostRange {
    pub fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max, "cost range min must not exceed max");
        Self { min, max }
    }

    /// Midpoint of the range, used by budget-alignment scoring.
    pub fn average(&self) -> f64 {
        f64::from(self.min + self.max) / 2.0
    }

    /// Scales both ends by `factor`, truncating to whole currency units.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            min: (f64::from(self.min) * factor) as u32,
            max: (f64::from(self.max) * factor) as u32,
        }
    }

    /// Shifts both ends up by a flat amount.
    pub fn plus_flat(&self, amount: u32) -> Self {
        Self {
            min: self.min + amount,
            max: self.max + amount,
        }
    }
}

/// Immutable description of one CMS or e-commerce provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    pub id: ProviderId,
    pub display_name: String,
    pub category: ProviderCategory,
    pub monthly_cost_range: CostRange,
    pub setup_cost_range: CostRange,
    /// Never empty; every member must resolve in the engine table.
    pub supported_engines: Vec<EngineId>,
    pub features: BTreeSet<String>,
    pub setup_complexity: SetupComplexity,
    pub content_api: ContentApi,
    /// Preferred engine when no requirement flag drives the choice.
    pub default_engine: EngineId,
    /// Fraction of sales charged per transaction. E-commerce only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_fee_fraction: Option<f64>,
}

impl ProviderDescriptor {
    pub fn supports(&self, engine: &EngineId) -> bool {
        self.supported_engines.contains(engine)
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_range_average() {
        assert_eq!(CostRange::new(0, 100).average(), 50.0);
        assert_eq!(CostRange::new(10, 10).average(), 10.0);
    }

    #[test]
    fn test_cost_range_scale_truncates() {
        let scaled = CostRange::new(10, 99).scale(1.3);
        assert_eq!(scaled, CostRange::new(13, 128));
    }

    #[test]
    fn test_cost_range_plus_flat() {
        assert_eq!(CostRange::new(5, 20).plus_flat(25), CostRange::new(30, 45));
    }
}
