//! SSG engine descriptor model.

use crate::EngineId;
use serde::{Deserialize, Serialize};

/// Immutable description of one static-site-generator engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineDescriptor {
    pub id: EngineId,
    pub display_name: String,
    /// Scales one-time setup cost. Baseline 1.0; always positive.
    /// Never applied to monthly cost.
    pub build_complexity_multiplier: f64,
    /// Informational ecosystem tag ("react", "go", ...) consumed by
    /// scoring heuristics only.
    pub ecosystem: String,
}

impl EngineDescriptor {
    pub fn new(
        id: EngineId,
        display_name: &str,
        build_complexity_multiplier: f64,
        ecosystem: &str,
    ) -> Self {
        debug_assert!(
            build_complexity_multiplier > 0.0,
            "build complexity multiplier must be positive"
        );
        Self {
            id,
            display_name: display_name.to_string(),
            build_complexity_multiplier,
            ecosystem: ecosystem.to_string(),
        }
    }
}
