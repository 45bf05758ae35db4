//! Provider/engine compatibility validation.
//!
//! Must run before template resolution or cost estimation: both are
//! undefined for a pairing that has not passed this check, and the
//! factory enforces that ordering.

use crate::catalog::StackCatalog;
use crate::error::StackError;
use crate::{EngineId, ProviderId};

/// Checks that `engine` is a member of the provider's supported set.
///
/// Succeeds if and only if `engine ∈ get_provider(provider).supported_engines`.
/// The failure carries the full supported set so interactive callers can
/// offer alternatives without a second lookup.
pub fn validate_pair(
    catalog: &StackCatalog,
    provider: &ProviderId,
    engine: &EngineId,
) -> Result<(), StackError> {
    let descriptor = catalog.get_provider(provider)?;
    catalog.get_engine(engine)?;
    if descriptor.supports(engine) {
        Ok(())
    } else {
        Err(StackError::Incompatible {
            provider: provider.clone(),
            engine: engine.clone(),
            supported: descriptor.supported_engines.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        snipcart_hugo = { ProviderId::Snipcart, EngineId::Hugo },
        sanity_nextjs = { ProviderId::Sanity, EngineId::NextJs },
        decap_eleventy = { ProviderId::Decap, EngineId::Eleventy },
        shopify_gatsby = { ProviderId::Shopify, EngineId::Gatsby },
    )]
    fn test_valid_pairs(provider: ProviderId, engine: EngineId) {
        let catalog = StackCatalog::with_defaults();
        assert!(validate_pair(&catalog, &provider, &engine).is_ok());
    }

    #[test]
    fn test_incompatible_pair_lists_supported_set() {
        let catalog = StackCatalog::with_defaults();
        let err = validate_pair(&catalog, &ProviderId::Snipcart, &EngineId::NextJs).unwrap_err();
        let expected = catalog
            .get_provider(&ProviderId::Snipcart)
            .unwrap()
            .supported_engines
            .clone();
        assert_eq!(
            err,
            StackError::Incompatible {
                provider: ProviderId::Snipcart,
                engine: EngineId::NextJs,
                supported: expected,
            }
        );
    }

    #[test]
    fn test_unknown_provider_propagates() {
        let catalog = StackCatalog::with_defaults();
        let err = validate_pair(&catalog, &ProviderId::parse("ghost"), &EngineId::Hugo);
        assert!(matches!(err, Err(StackError::ProviderNotFound { .. })));
    }

    #[test]
    fn test_unknown_engine_propagates() {
        let catalog = StackCatalog::with_defaults();
        let err = validate_pair(&catalog, &ProviderId::Sanity, &EngineId::parse("zola"));
        assert!(matches!(err, Err(StackError::EngineNotFound { .. })));
    }

    /// Compatibility must mirror the registry exactly, in both directions.
    #[test]
    fn test_symmetry_with_catalog() {
        let catalog = StackCatalog::with_defaults();
        for provider in catalog.providers() {
            for engine in catalog.engines() {
                let valid = validate_pair(&catalog, &provider.id, &engine.id).is_ok();
                assert_eq!(valid, provider.supports(&engine.id));
            }
        }
    }
}
