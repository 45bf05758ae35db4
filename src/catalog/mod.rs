//! Provider and engine catalog.
//!
//! `StackCatalog` owns every `ProviderDescriptor` and `EngineDescriptor`
//! the engine can reason about. It follows an initialize-then-freeze
//! discipline: build it (defaults plus any runtime registrations) on one
//! thread, then share it immutably — typically behind an `Arc`. Lookups
//! are pure and lock-free.

mod cms;
mod commerce;
mod engines;

use crate::engine::EngineDescriptor;
use crate::error::StackError;
use crate::provider::{ProviderCategory, ProviderDescriptor};
use crate::{EngineId, ProviderId};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct StackCatalog {
    providers: Vec<ProviderDescriptor>,
    provider_index: HashMap<ProviderId, usize>,
    engines: Vec<EngineDescriptor>,
    engine_index: HashMap<EngineId, usize>,
}

impl StackCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with all built-in engines and providers registered, in a
    /// fixed insertion order. Built-in data never violates registration
    /// invariants, so construction cannot fail.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for engine in engines::defaults() {
            catalog
                .register_engine(engine)
                .expect("built-in engine registration");
        }
        for provider in cms::defaults().into_iter().chain(commerce::defaults()) {
            catalog
                .register_provider(provider)
                .expect("built-in provider registration");
        }
        catalog
    }

    /// Registers an engine. Duplicate ids are an error, never a silent
    /// overwrite.
    pub fn register_engine(&mut self, engine: EngineDescriptor) -> Result<(), StackError> {
        if self.engine_index.contains_key(&engine.id) {
            warn!(engine = %engine.id, "rejected duplicate engine registration");
            return Err(StackError::DuplicateEngine(engine.id));
        }
        self.engine_index.insert(engine.id.clone(), self.engines.len());
        self.engines.push(engine);
        Ok(())
    }

    /// Registers a provider. Duplicate ids are an error; the descriptor's
    /// engine references must all resolve in the engine table.
    pub fn register_provider(&mut self, provider: ProviderDescriptor) -> Result<(), StackError> {
        if self.provider_index.contains_key(&provider.id) {
            warn!(provider = %provider.id, "rejected duplicate provider registration");
            return Err(StackError::DuplicateProvider(provider.id));
        }
        if provider.supported_engines.is_empty() {
            return Err(StackError::Configuration(format!(
                "provider '{}' declares no supported engines",
                provider.id
            )));
        }
        for engine in provider
            .supported_engines
            .iter()
            .chain(std::iter::once(&provider.default_engine))
        {
            if !self.engine_index.contains_key(engine) {
                return Err(StackError::Configuration(format!(
                    "provider '{}' references unknown engine '{}'",
                    provider.id, engine
                )));
            }
        }
        self.provider_index
            .insert(provider.id.clone(), self.providers.len());
        self.providers.push(provider);
        Ok(())
    }

    pub fn get_provider(&self, id: &ProviderId) -> Result<&ProviderDescriptor, StackError> {
        self.provider_index
            .get(id)
            .map(|&idx| &self.providers[idx])
            .ok_or_else(|| StackError::ProviderNotFound {
                id: id.clone(),
                known: self.providers.iter().map(|p| p.id.clone()).collect(),
            })
    }

    pub fn get_engine(&self, id: &EngineId) -> Result<&EngineDescriptor, StackError> {
        self.engine_index
            .get(id)
            .map(|&idx| &self.engines[idx])
            .ok_or_else(|| StackError::EngineNotFound {
                id: id.clone(),
                known: self.engines.iter().map(|e| e.id.clone()).collect(),
            })
    }

    /// Providers in insertion order.
    pub fn providers(&self) -> impl Iterator<Item = &ProviderDescriptor> {
        self.providers.iter()
    }

    /// Providers of one category, insertion order preserved.
    pub fn providers_in(
        &self,
        category: ProviderCategory,
    ) -> impl Iterator<Item = &ProviderDescriptor> {
        self.providers.iter().filter(move |p| p.category == category)
    }

    /// Engines in insertion order.
    pub fn engines(&self) -> impl Iterator<Item = &EngineDescriptor> {
        self.engines.iter()
    }
}
