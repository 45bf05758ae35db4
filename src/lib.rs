//! sitesmith - decision engine for static-site stacks
//!
//! This library pairs static-site-generator (SSG) engines with CMS and
//! e-commerce providers: it validates compatibility, recommends engines
//! and providers against client requirements, resolves curated template
//! variants, and computes layered cost estimates. The output is a
//! validated plan consumed by external infrastructure-provisioning
//! tooling; this crate never provisions resources itself.
//!
//! # Core Concepts
//!
//! - **Catalog**: immutable provider/engine descriptor tables, built
//!   once and shared read-only (initialize-then-freeze)
//! - **Compatibility**: a (provider, engine) pair is legal only when
//!   the engine is in the provider's supported set
//! - **Suitability**: an ordered rule set scores providers against
//!   free-form client requirements, with a reason per fired rule
//! - **Cost layering**: independent multiplicative factors (content
//!   volume, team size, engine complexity) over base cost ranges
//!
//! # Example Usage
//!
//! ```
//! use sitesmith::{ClientRequirements, ProviderId, StackFactory, StackRequest};
//!
//! let factory = StackFactory::with_defaults();
//! let request = StackRequest::new(ProviderId::Snipcart)
//!     .requirements(ClientRequirements::new().budget_conscious(true));
//! let plan = factory.plan(&request).expect("snipcart plans cleanly");
//! assert!(!plan.selection.template_variant.is_empty());
//! ```
//!
//! # Project Structure
//!
//! - [`catalog`]: provider/engine registry and built-in descriptors
//! - [`compat`]: pairing validation
//! - [`template`]: template variants and build-environment tables
//! - [`scoring`] / [`recommend`]: suitability rules and ranking
//! - [`cost`]: layered cost estimation
//! - [`factory`]: the dispatch layer assembling `StackPlan`s

#[macro_use]
pub mod id_enum_macro;

pub mod catalog;
pub mod compat;
pub mod cost;
pub mod engine;
pub mod engine_id;
pub mod error;
pub mod factory;
pub mod provider;
pub mod provider_id;
pub mod recommend;
pub mod requirements;
pub mod scoring;
pub mod template;

pub use catalog::StackCatalog;
pub use cost::{AppliedMultiplier, CostBreakdown, CostEstimate};
pub use engine::EngineDescriptor;
pub use engine_id::EngineId;
pub use error::StackError;
pub use factory::{StackFactory, StackPlan, StackRequest, ValidatedSelection};
pub use provider::{
    ContentApi, CostRange, ProviderCategory, ProviderDescriptor, SetupComplexity,
};
pub use provider_id::ProviderId;
pub use recommend::{rank_providers, recommend_engine, ProviderRecommendation};
pub use requirements::{ClientRequirements, ContentVolume};
pub use scoring::{score, SuitabilityResult, SuitabilityTier};
pub use template::{build_env, resolve_variant, EnvPurpose, EnvVar};
