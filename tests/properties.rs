//! Cross-cutting engine properties.
//!
//! Totality, monotonicity, independence, and determinism checks that
//! sweep the whole built-in catalog rather than single pairings.

use sitesmith::{
    recommend_engine, resolve_variant, score, ClientRequirements, ContentVolume, EngineId,
    ProviderId, StackCatalog, StackError,
};
use sitesmith::cost::{estimate, TEAM_CALIBRATION};
use yare::parameterized;

fn requirement_grid() -> Vec<ClientRequirements> {
    let mut grid = Vec::new();
    for budget in [false, true] {
        for technical in [false, true] {
            for performance in [false, true] {
                for volume in [ContentVolume::Small, ContentVolume::Medium, ContentVolume::Large] {
                    grid.push(
                        ClientRequirements::new()
                            .budget_conscious(budget)
                            .technical_team(technical)
                            .performance_critical(performance)
                            .content_volume(volume),
                    );
                }
            }
        }
    }
    grid
}

/// Engine recommendation is total: every provider and every requirement
/// combination yields a supported engine.
#[test]
fn test_recommendation_totality_over_grid() {
    let catalog = StackCatalog::with_defaults();
    for provider in catalog.providers() {
        for reqs in requirement_grid() {
            let engine = recommend_engine(provider, &reqs);
            assert!(
                provider.supports(&engine),
                "{} -> {engine} unsupported",
                provider.id
            );
        }
    }
}

/// Template resolution is total and non-empty for every validated pair.
#[test]
fn test_variant_totality() {
    let catalog = StackCatalog::with_defaults();
    for provider in catalog.providers() {
        for engine in &provider.supported_engines {
            assert!(!resolve_variant(engine, &provider.id).is_empty());
        }
    }
}

/// Increasing the volume tier never decreases the monthly range.
#[test]
fn test_monthly_cost_monotonic_in_volume() {
    let catalog = StackCatalog::with_defaults();
    let tiers = [ContentVolume::Small, ContentVolume::Medium, ContentVolume::Large];
    for provider in catalog.providers() {
        let engine = provider.supported_engines[0].clone();
        let mut last_max = 0;
        for volume in tiers {
            let est = estimate(&catalog, &provider.id, &engine, volume, 2, None).unwrap();
            assert!(
                est.monthly_cost_range.max >= last_max,
                "{} shrank at {volume:?}",
                provider.id
            );
            last_max = est.monthly_cost_range.max;
        }
    }
}

/// Increasing team size along the calibration points never decreases
/// the monthly range.
#[test]
fn test_monthly_cost_monotonic_in_team_size() {
    let catalog = StackCatalog::with_defaults();
    for provider in catalog.providers() {
        let engine = provider.supported_engines[0].clone();
        let mut last_max = 0;
        for &(team_size, _) in TEAM_CALIBRATION {
            let est = estimate(
                &catalog,
                &provider.id,
                &engine,
                ContentVolume::Medium,
                team_size,
                None,
            )
            .unwrap();
            assert!(est.monthly_cost_range.max >= last_max, "{}", provider.id);
            last_max = est.monthly_cost_range.max;
        }
    }
}

/// Engine choice moves setup cost only; monthly estimates must be
/// identical across every engine a provider supports.
#[test]
fn test_engine_multiplier_independent_of_monthly() {
    let catalog = StackCatalog::with_defaults();
    for provider in catalog.providers() {
        let mut monthly = None;
        for engine in &provider.supported_engines {
            let est = estimate(
                &catalog,
                &provider.id,
                engine,
                ContentVolume::Medium,
                5,
                None,
            )
            .unwrap();
            match &monthly {
                None => monthly = Some(est.monthly_cost_range),
                Some(expected) => assert_eq!(
                    est.monthly_cost_range, *expected,
                    "{} monthly moved with engine {engine}",
                    provider.id
                ),
            }
        }
    }
}

/// Scoring has no hidden state: repeated calls agree exactly.
#[test]
fn test_score_determinism_over_grid() {
    let catalog = StackCatalog::with_defaults();
    for provider in catalog.providers() {
        for reqs in requirement_grid() {
            assert_eq!(score(provider, &reqs), score(provider, &reqs));
        }
    }
}

/// The breakdown sums to the quoted monthly total for every provider.
#[test]
fn test_breakdown_additivity_over_catalog() {
    let catalog = StackCatalog::with_defaults();
    for provider in catalog.providers() {
        let engine = provider.supported_engines[0].clone();
        let est = estimate(
            &catalog,
            &provider.id,
            &engine,
            ContentVolume::Large,
            5,
            None,
        )
        .unwrap();
        let flat = est.breakdown.hosting_monthly + est.breakdown.maintenance_monthly;
        assert_eq!(
            est.total_monthly_range.max,
            est.breakdown.provider_monthly.max + flat,
            "{}",
            provider.id
        );
    }
}

#[parameterized(
    provider_lookup = { "does-not-exist" },
    provider_typo = { "sanityy" },
)]
fn test_unknown_provider_never_partial(token: &str) {
    let catalog = StackCatalog::with_defaults();
    let err = catalog.get_provider(&ProviderId::parse(token)).unwrap_err();
    match err {
        StackError::ProviderNotFound { id, known } => {
            assert_eq!(id.as_str(), token);
            assert!(!known.is_empty());
        }
        other => panic!("expected ProviderNotFound, got {other:?}"),
    }
}

#[test]
fn test_unknown_engine_never_partial() {
    let catalog = StackCatalog::with_defaults();
    assert!(matches!(
        catalog.get_engine(&EngineId::parse("jekyll")),
        Err(StackError::EngineNotFound { .. })
    ));
}
