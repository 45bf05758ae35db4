//! Suitability scoring.
//!
//! Scoring runs a fixed, ordered set of rule objects against one
//! provider descriptor and one requirements snapshot. Every rule may
//! contribute zero or more weighted deltas, each with a human-readable
//! reason. The fold is deterministic: no clocks, no randomness, no
//! state between calls.

use crate::provider::{ContentApi, ProviderDescriptor, SetupComplexity};
use crate::requirements::{ClientRequirements, ContentVolume};
use serde::{Deserialize, Serialize};
use tracing::debug;

// Rule weights. Fixed constants in the current design; named so tests
// can reference them instead of magic numbers.
pub const BUDGET_MATCH_BONUS: f64 = 3.0;
pub const PREMIUM_MATCH_BONUS: f64 = 2.0;
pub const BUDGET_NEUTRAL_BONUS: f64 = 1.5;
pub const FEATURE_PRESENT_BONUS: f64 = 1.0;
pub const FEATURE_MISSING_PENALTY: f64 = -1.5;
pub const SKILL_STRONG_MATCH_BONUS: f64 = 2.0;
pub const SKILL_PARTIAL_MATCH_BONUS: f64 = 1.0;
pub const VOLUME_API_BONUS: f64 = 1.5;
pub const VOLUME_GIT_BONUS: f64 = 1.0;
pub const FLAG_PRESENT_BONUS: f64 = 1.0;
pub const FLAG_MISSING_PENALTY: f64 = -1.0;

/// Average monthly cost at or below this counts as budget-friendly.
pub const BUDGET_FRIENDLY_CEILING: f64 = 75.0;
/// Average monthly cost above this counts as a premium platform.
pub const PREMIUM_FLOOR: f64 = 150.0;

/// Tier thresholds applied to the final score.
pub const EXCELLENT_THRESHOLD: f64 = 8.0;
pub const GOOD_THRESHOLD: f64 = 6.0;

/// Three-level suitability tier derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityTier {
    Excellent,
    Good,
    Limited,
}

impl SuitabilityTier {
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if score >= GOOD_THRESHOLD {
            Self::Good
        } else {
            Self::Limited
        }
    }
}

/// Outcome of scoring one provider against one requirements snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityResult {
    pub score: f64,
    /// One entry per rule contribution, in rule order.
    pub reasons: Vec<String>,
    pub tier: SuitabilityTier,
}

/// One weighted contribution from a rule.
struct Contribution {
    delta: f64,
    reason: String,
}

/// A scoring rule: a name plus a pure evaluation function. Rules run
/// unconditionally in slice order; a rule that does not apply
/// contributes nothing.
struct ScoringRule {
    name: &'static str,
    eval: fn(&ProviderDescriptor, &ClientRequirements) -> Vec<Contribution>,
}

fn budget_alignment(provider: &ProviderDescriptor, reqs: &ClientRequirements) -> Vec<Contribution> {
    let average = provider.monthly_cost_range.average();
    let (delta, reason) = if reqs.budget_conscious && average <= BUDGET_FRIENDLY_CEILING {
        (
            BUDGET_MATCH_BONUS,
            format!("low running cost (avg {average:.0}/mo) fits a budget-conscious client"),
        )
    } else if !reqs.budget_conscious && average > PREMIUM_FLOOR {
        (
            PREMIUM_MATCH_BONUS,
            format!("premium platform (avg {average:.0}/mo) matched to an unconstrained budget"),
        )
    } else {
        (
            BUDGET_NEUTRAL_BONUS,
            format!("acceptable cost profile (avg {average:.0}/mo)"),
        )
    };
    vec![Contribution { delta, reason }]
}

fn required_features(provider: &ProviderDescriptor, reqs: &ClientRequirements) -> Vec<Contribution> {
    reqs.required_features
        .iter()
        .map(|feature| {
            if provider.has_feature(feature) {
                Contribution {
                    delta: FEATURE_PRESENT_BONUS,
                    reason: format!("provides required feature '{feature}'"),
                }
            } else {
                Contribution {
                    delta: FEATURE_MISSING_PENALTY,
                    reason: format!("missing required feature '{feature}'"),
                }
            }
        })
        .collect()
}

fn team_skill(provider: &ProviderDescriptor, reqs: &ClientRequirements) -> Vec<Contribution> {
    let contribution = match (reqs.technical_team, provider.setup_complexity) {
        (true, SetupComplexity::High) => Some(Contribution {
            delta: SKILL_STRONG_MATCH_BONUS,
            reason: "technical team can exploit an advanced setup".to_string(),
        }),
        (false, SetupComplexity::Low) => Some(Contribution {
            delta: SKILL_STRONG_MATCH_BONUS,
            reason: "simple setup suits a non-technical team".to_string(),
        }),
        (true, SetupComplexity::Medium) => Some(Contribution {
            delta: SKILL_PARTIAL_MATCH_BONUS,
            reason: "moderate setup is comfortable for a technical team".to_string(),
        }),
        _ => None,
    };
    contribution.into_iter().collect()
}

fn content_volume(provider: &ProviderDescriptor, reqs: &ClientRequirements) -> Vec<Contribution> {
    let contribution = match (reqs.content_volume, provider.content_api) {
        (ContentVolume::Large, ContentApi::ApiDriven) => Some(Contribution {
            delta: VOLUME_API_BONUS,
            reason: "API-driven content scales to a large volume".to_string(),
        }),
        (ContentVolume::Small, ContentApi::GitBased) => Some(Contribution {
            delta: VOLUME_GIT_BONUS,
            reason: "git-based workflow is enough for a small volume".to_string(),
        }),
        _ => None,
    };
    contribution.into_iter().collect()
}

fn localization(provider: &ProviderDescriptor, reqs: &ClientRequirements) -> Vec<Contribution> {
    if !reqs.needs_localization {
        return Vec::new();
    }
    let contribution = if provider.has_feature("localization") {
        Contribution {
            delta: FLAG_PRESENT_BONUS,
            reason: "supports multi-language content".to_string(),
        }
    } else {
        Contribution {
            delta: FLAG_MISSING_PENALTY,
            reason: "no multi-language support".to_string(),
        }
    };
    vec![contribution]
}

fn collaboration(provider: &ProviderDescriptor, reqs: &ClientRequirements) -> Vec<Contribution> {
    if !reqs.collaborative_editing {
        return Vec::new();
    }
    let contribution = if provider.has_feature("realtime_collaboration") {
        Contribution {
            delta: FLAG_PRESENT_BONUS,
            reason: "supports collaborative editing".to_string(),
        }
    } else {
        Contribution {
            delta: FLAG_MISSING_PENALTY,
            reason: "no collaborative editing".to_string(),
        }
    };
    vec![contribution]
}

/// The rule set, in its fixed execution order.
const RULES: &[ScoringRule] = &[
    ScoringRule { name: "budget_alignment", eval: budget_alignment },
    ScoringRule { name: "required_features", eval: required_features },
    ScoringRule { name: "team_skill", eval: team_skill },
    ScoringRule { name: "content_volume", eval: content_volume },
    ScoringRule { name: "localization", eval: localization },
    ScoringRule { name: "collaboration", eval: collaboration },
];

/// Scores one provider against the client requirements.
pub fn score(provider: &ProviderDescriptor, reqs: &ClientRequirements) -> SuitabilityResult {
    let mut total = 0.0;
    let mut reasons = Vec::new();
    for rule in RULES {
        for contribution in (rule.eval)(provider, reqs) {
            debug!(
                provider = %provider.id,
                rule = rule.name,
                delta = contribution.delta,
                "scoring rule fired"
            );
            total += contribution.delta;
            reasons.push(contribution.reason);
        }
    }
    SuitabilityResult {
        score: total,
        reasons,
        tier: SuitabilityTier::from_score(total),
    }
}
