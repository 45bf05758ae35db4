//! Stack factory: the dispatch layer that turns a request into a
//! validated, costed plan.
//!
//! The factory owns the phase ordering: requirements validation →
//! provider resolution → engine recommendation (when omitted) →
//! compatibility validation → template/environment resolution → cost
//! estimation. Any failure aborts the whole plan; a `StackPlan` is
//! never partially constructed.

use crate::catalog::StackCatalog;
use crate::compat::validate_pair;
use crate::cost::{estimate, CostEstimate};
use crate::error::StackError;
use crate::recommend::recommend_engine;
use crate::requirements::ClientRequirements;
use crate::scoring::{score, SuitabilityResult};
use crate::template::{build_env, resolve_variant, EnvVar};
use crate::{EngineId, ProviderId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// One stack-creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackRequest {
    pub provider: ProviderId,
    /// When omitted, the factory recommends one from the requirements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineId>,
    #[serde(default)]
    pub requirements: ClientRequirements,
}

impl StackRequest {
    pub fn new(provider: ProviderId) -> Self {
        Self {
            provider,
            engine: None,
            requirements: ClientRequirements::default(),
        }
    }

    pub fn engine(mut self, engine: EngineId) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn requirements(mut self, requirements: ClientRequirements) -> Self {
        self.requirements = requirements;
        self
    }
}

/// A fully validated (provider, engine, template) decision, plus the
/// build environment the provisioning layer injects. Constructed once
/// per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedSelection {
    pub provider_id: ProviderId,
    pub engine_id: EngineId,
    pub template_variant: String,
    pub build_env: Vec<EnvVar>,
}

/// Everything the provisioning layer and client-facing tooling need
/// from one planning pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackPlan {
    pub selection: ValidatedSelection,
    pub estimate: CostEstimate,
    pub suitability: SuitabilityResult,
}

pub struct StackFactory {
    catalog: Arc<StackCatalog>,
}

impl StackFactory {
    pub fn new(catalog: Arc<StackCatalog>) -> Self {
        Self { catalog }
    }

    /// Factory over the built-in catalog.
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(StackCatalog::with_defaults()))
    }

    pub fn catalog(&self) -> &StackCatalog {
        &self.catalog
    }

    /// Plans a stack. Fail-fast and atomic: the first error aborts and
    /// is surfaced to the caller unchanged.
    pub fn plan(&self, request: &StackRequest) -> Result<StackPlan, StackError> {
        let start = Instant::now();
        request.requirements.validate()?;

        let provider = self.catalog.get_provider(&request.provider)?;
        let reqs = &request.requirements;

        let (engine_id, recommended) = match &request.engine {
            Some(engine) => (engine.clone(), false),
            None => (recommend_engine(provider, reqs), true),
        };
        info!(
            provider = %provider.id,
            engine = %engine_id,
            recommended,
            "engine selected"
        );

        validate_pair(&self.catalog, &provider.id, &engine_id)?;

        let template_variant = resolve_variant(&engine_id, &provider.id);
        let env = build_env(&engine_id, &provider.id);
        let cost = estimate(
            &self.catalog,
            &provider.id,
            &engine_id,
            reqs.content_volume,
            reqs.team_size,
            reqs.expected_monthly_sales,
        )?;
        let suitability = score(provider, reqs);

        info!(
            provider = %provider.id,
            engine = %engine_id,
            variant = %template_variant,
            score = suitability.score,
            duration_ms = start.elapsed().as_millis(),
            "stack plan assembled"
        );

        Ok(StackPlan {
            selection: ValidatedSelection {
                provider_id: provider.id.clone(),
                engine_id,
                template_variant,
                build_env: env,
            },
            estimate: cost,
            suitability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::ContentVolume;

    #[test]
    fn test_plan_with_explicit_engine() {
        let factory = StackFactory::with_defaults();
        let request = StackRequest::new(ProviderId::Sanity).engine(EngineId::NextJs);
        let plan = factory.plan(&request).unwrap();
        assert_eq!(plan.selection.engine_id, EngineId::NextJs);
        assert_eq!(plan.selection.template_variant, "nextjs_sanity_studio");
        assert!(!plan.selection.build_env.is_empty());
    }

    #[test]
    fn test_plan_recommends_engine_when_omitted() {
        let factory = StackFactory::with_defaults();
        let request = StackRequest::new(ProviderId::Snipcart).requirements(
            ClientRequirements::new()
                .budget_conscious(true)
                .technical_team(true),
        );
        let plan = factory.plan(&request).unwrap();
        assert_eq!(plan.selection.engine_id, EngineId::Hugo);
    }

    #[test]
    fn test_plan_rejects_incompatible_pair() {
        let factory = StackFactory::with_defaults();
        let request = StackRequest::new(ProviderId::Snipcart).engine(EngineId::NextJs);
        let err = factory.plan(&request).unwrap_err();
        assert!(matches!(err, StackError::Incompatible { .. }));
    }

    #[test]
    fn test_plan_rejects_unknown_provider() {
        let factory = StackFactory::with_defaults();
        let request = StackRequest::new(ProviderId::parse("ghost"));
        let err = factory.plan(&request).unwrap_err();
        assert!(matches!(err, StackError::ProviderNotFound { .. }));
    }

    #[test]
    fn test_invalid_requirements_fail_before_lookup() {
        let factory = StackFactory::with_defaults();
        // Provider is also unknown; the requirements check must win.
        let request = StackRequest::new(ProviderId::parse("ghost"))
            .requirements(ClientRequirements::new().team_size(0));
        let err = factory.plan(&request).unwrap_err();
        assert!(matches!(err, StackError::Configuration(_)));
    }

    #[test]
    fn test_plan_carries_cost_and_suitability() {
        let factory = StackFactory::with_defaults();
        let request = StackRequest::new(ProviderId::Shopify).requirements(
            ClientRequirements::new()
                .content_volume(ContentVolume::Large)
                .team_size(5)
                .expected_monthly_sales(10_000.0),
        );
        let plan = factory.plan(&request).unwrap();
        assert!(plan.estimate.breakdown.transaction_fees.is_some());
        assert_eq!(plan.estimate.multipliers_applied.len(), 3);
        assert!(!plan.suitability.reasons.is_empty());
    }

    #[test]
    fn test_plan_serializes_to_json() {
        let factory = StackFactory::with_defaults();
        let plan = factory
            .plan(&StackRequest::new(ProviderId::Decap))
            .unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["selection"]["provider_id"], "decap");
    }
}
