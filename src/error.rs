use crate::{EngineId, ProviderId};
use thiserror::Error;

/// Failures surfaced by catalog lookups, validation, and planning.
///
/// Every variant is a local, synchronous failure: nothing here is
/// retried, and no partial result accompanies an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StackError {
    #[error("unknown provider '{id}' (known providers: {known:?})")]
    ProviderNotFound { id: ProviderId, known: Vec<ProviderId> },

    #[error("unknown engine '{id}' (known engines: {known:?})")]
    EngineNotFound { id: EngineId, known: Vec<EngineId> },

    #[error("engine '{engine}' is not supported by provider '{provider}' (supported: {supported:?})")]
    Incompatible {
        provider: ProviderId,
        engine: EngineId,
        /// Full compatible-engine set, so interactive callers can present
        /// alternatives without a second round trip.
        supported: Vec<EngineId>,
    },

    #[error("invalid requirements: {0}")]
    Configuration(String),

    #[error("provider '{0}' is already registered")]
    DuplicateProvider(ProviderId),

    #[error("engine '{0}' is already registered")]
    DuplicateEngine(EngineId),
}
