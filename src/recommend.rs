//! Provider ranking and engine recommendation.

use crate::catalog::StackCatalog;
use crate::provider::{ProviderCategory, ProviderDescriptor};
use crate::requirements::ClientRequirements;
use crate::scoring::{score, SuitabilityResult};
use crate::{EngineId, ProviderId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Candidates scoring below this are dropped from ranked lists.
pub const INCLUSION_THRESHOLD: f64 = 6.0;

/// Engines ordered by build speed, fastest first.
const SPEED_ORDER: &[EngineId] = &[
    EngineId::Hugo,
    EngineId::Eleventy,
    EngineId::Astro,
    EngineId::NextJs,
    EngineId::Gatsby,
];

/// Engines ordered by authoring ease for non-technical teams.
const EASE_ORDER: &[EngineId] = &[
    EngineId::Astro,
    EngineId::NextJs,
    EngineId::Gatsby,
    EngineId::Eleventy,
    EngineId::Hugo,
];

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRecommendation {
    pub provider: ProviderId,
    pub result: SuitabilityResult,
}

/// Scores every catalog provider (optionally one category), drops
/// candidates below `INCLUSION_THRESHOLD`, and sorts descending by
/// score. The sort is stable, so ties keep catalog insertion order.
pub fn rank_providers(
    catalog: &StackCatalog,
    category: Option<ProviderCategory>,
    reqs: &ClientRequirements,
) -> Vec<ProviderRecommendation> {
    let mut ranked: Vec<ProviderRecommendation> = catalog
        .providers()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .map(|p| ProviderRecommendation {
            provider: p.id.clone(),
            result: score(p, reqs),
        })
        .filter(|r| r.result.score >= INCLUSION_THRESHOLD)
        .collect();
    ranked.sort_by(|a, b| {
        b.result
            .score
            .partial_cmp(&a.result.score)
            .expect("scores are finite")
    });
    debug!(candidates = ranked.len(), "ranked providers");
    ranked
}

/// Recommends an engine for a provider. Total: always returns a member
/// of the provider's supported set.
///
/// Preference walk, first supported entry wins:
/// 1. performance-critical clients → build-speed order;
/// 2. budget-conscious clients → build-speed order (fast builds keep CI
///    spend down);
/// 3. non-technical teams → authoring-ease order;
/// 4. the provider's default engine, if supported;
/// 5. the provider's first supported engine.
pub fn recommend_engine(provider: &ProviderDescriptor, reqs: &ClientRequirements) -> EngineId {
    let first_supported = |order: &[EngineId]| {
        order
            .iter()
            .find(|engine| provider.supports(engine))
            .cloned()
    };

    let preference = if reqs.performance_critical || reqs.budget_conscious {
        first_supported(SPEED_ORDER)
    } else if !reqs.technical_team {
        first_supported(EASE_ORDER)
    } else {
        None
    };

    preference
        .or_else(|| {
            provider
                .supports(&provider.default_engine)
                .then(|| provider.default_engine.clone())
        })
        .unwrap_or_else(|| provider.supported_engines[0].clone())
}
