//! Layered cost estimation.
//!
//! Estimates start from the provider's base ranges and apply three
//! independent multiplicative factors: content volume (both ranges),
//! team size (monthly only — headcount does not change one-time setup
//! work), and engine build complexity (setup only — engine choice does
//! not change hosting fees). Results truncate to whole currency units.

use crate::catalog::StackCatalog;
use crate::error::StackError;
use crate::provider::{CostRange, SetupComplexity};
use crate::requirements::ContentVolume;
use crate::{EngineId, ProviderId};
use serde::{Deserialize, Serialize};

/// Team-size calibration points: (team size, monthly multiplier).
/// Requests between points use the numerically nearest point;
/// equidistant ties resolve to the smaller point.
pub const TEAM_CALIBRATION: &[(u32, f64)] = &[(1, 1.0), (2, 1.1), (5, 1.3), (10, 1.6)];

const VOLUME_MULTIPLIER_SMALL: f64 = 0.8;
const VOLUME_MULTIPLIER_MEDIUM: f64 = 1.0;
const VOLUME_MULTIPLIER_LARGE: f64 = 1.3;

const HOSTING_FEE_SMALL: u32 = 5;
const HOSTING_FEE_MEDIUM: u32 = 20;
const HOSTING_FEE_LARGE: u32 = 50;

const MAINTENANCE_FEE_LOW: u32 = 10;
const MAINTENANCE_FEE_MEDIUM: u32 = 25;
const MAINTENANCE_FEE_HIGH: u32 = 50;

pub fn volume_multiplier(volume: ContentVolume) -> f64 {
    match volume {
        ContentVolume::Small => VOLUME_MULTIPLIER_SMALL,
        ContentVolume::Medium => VOLUME_MULTIPLIER_MEDIUM,
        ContentVolume::Large => VOLUME_MULTIPLIER_LARGE,
    }
}

/// Flat monthly hosting fee, indexed by volume. Not multiplied further.
pub fn hosting_fee(volume: ContentVolume) -> u32 {
    match volume {
        ContentVolume::Small => HOSTING_FEE_SMALL,
        ContentVolume::Medium => HOSTING_FEE_MEDIUM,
        ContentVolume::Large => HOSTING_FEE_LARGE,
    }
}

/// Flat monthly maintenance fee, indexed by setup complexity.
pub fn maintenance_fee(complexity: SetupComplexity) -> u32 {
    match complexity {
        SetupComplexity::Low => MAINTENANCE_FEE_LOW,
        SetupComplexity::Medium => MAINTENANCE_FEE_MEDIUM,
        SetupComplexity::High => MAINTENANCE_FEE_HIGH,
    }
}

/// Nearest calibration point, scanning ascending with strict `<` so an
/// equidistant request keeps the earlier (smaller) point.
fn nearest_calibration(points: &[(u32, f64)], team_size: u32) -> (u32, f64) {
    let mut best = points[0];
    let mut best_distance = team_size.abs_diff(best.0);
    for &point in &points[1..] {
        let distance = team_size.abs_diff(point.0);
        if distance < best_distance {
            best = point;
            best_distance = distance;
        }
    }
    best
}

pub fn team_multiplier(team_size: u32) -> (u32, f64) {
    nearest_calibration(TEAM_CALIBRATION, team_size)
}

/// One applied factor, kept for auditability of the final quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedMultiplier {
    pub source: String,
    pub factor: f64,
}

/// Named monthly sub-costs. `provider_monthly` plus the two flat fees
/// sums exactly to `CostEstimate::total_monthly_range`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub provider_monthly: CostRange,
    pub hosting_monthly: u32,
    pub maintenance_monthly: u32,
    /// `transaction_fee_fraction × expected_monthly_sales`, reported as
    /// a separate line for fee-charging providers. Additive to the
    /// monthly range, never blended into it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_fees: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Base setup × volume × engine complexity.
    pub setup_cost_range: CostRange,
    /// Base monthly × volume × team size (provider subscription only).
    pub monthly_cost_range: CostRange,
    /// Monthly range plus flat hosting and maintenance fees — the
    /// number used for client quoting.
    pub total_monthly_range: CostRange,
    pub breakdown: CostBreakdown,
    pub multipliers_applied: Vec<AppliedMultiplier>,
}

/// Computes the layered estimate for a validated pairing.
pub fn estimate(
    catalog: &StackCatalog,
    provider_id: &ProviderId,
    engine_id: &EngineId,
    volume: ContentVolume,
    team_size: u32,
    expected_monthly_sales: Option<f64>,
) -> Result<CostEstimate, StackError> {
    if team_size == 0 {
        return Err(StackError::Configuration(
            "team_size must be at least 1".to_string(),
        ));
    }
    let provider = catalog.get_provider(provider_id)?;
    let engine = catalog.get_engine(engine_id)?;

    let volume_factor = volume_multiplier(volume);
    let (calibration_point, team_factor) = team_multiplier(team_size);
    let engine_factor = engine.build_complexity_multiplier;

    let setup_cost_range = provider.setup_cost_range.scale(volume_factor * engine_factor);
    let monthly_cost_range = provider.monthly_cost_range.scale(volume_factor * team_factor);

    let hosting_monthly = hosting_fee(volume);
    let maintenance_monthly = maintenance_fee(provider.setup_complexity);
    let total_monthly_range = monthly_cost_range.plus_flat(hosting_monthly + maintenance_monthly);

    let transaction_fees = match (provider.transaction_fee_fraction, expected_monthly_sales) {
        (Some(fraction), Some(sales)) => Some(fraction * sales),
        _ => None,
    };

    let multipliers_applied = vec![
        AppliedMultiplier {
            source: format!("content_volume({volume:?})"),
            factor: volume_factor,
        },
        AppliedMultiplier {
            source: format!("team_size({team_size}, calibration point {calibration_point})"),
            factor: team_factor,
        },
        AppliedMultiplier {
            source: format!("engine_complexity({engine_id})"),
            factor: engine_factor,
        },
    ];

    Ok(CostEstimate {
        setup_cost_range,
        monthly_cost_range,
        total_monthly_range,
        breakdown: CostBreakdown {
            provider_monthly: monthly_cost_range,
            hosting_monthly,
            maintenance_monthly,
            transaction_fees,
        },
        multipliers_applied,
    })
}
