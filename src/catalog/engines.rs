//! Built-in SSG engine descriptors.

use crate::engine::EngineDescriptor;
use crate::EngineId;

/// Engines registered by `StackCatalog::with_defaults`, in insertion
/// order. Multipliers scale one-time setup cost against the 1.0 baseline;
/// Hugo's lean toolchain sits below it, React-based engines above.
pub(super) fn defaults() -> Vec<EngineDescriptor> {
    vec![
        EngineDescriptor::new(EngineId::Hugo, "Hugo", 0.9, "go"),
        EngineDescriptor::new(EngineId::Eleventy, "Eleventy", 0.95, "javascript"),
        EngineDescriptor::new(EngineId::Astro, "Astro", 1.0, "javascript"),
        EngineDescriptor::new(EngineId::NextJs, "Next.js", 1.2, "react"),
        EngineDescriptor::new(EngineId::Gatsby, "Gatsby", 1.35, "react"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_multipliers_positive() {
        for engine in defaults() {
            assert!(engine.build_complexity_multiplier > 0.0, "{}", engine.id);
        }
    }

    #[test]
    fn test_hugo_is_cheapest_to_set_up() {
        let engines = defaults();
        let hugo = engines.iter().find(|e| e.id == EngineId::Hugo).unwrap();
        for engine in &engines {
            assert!(hugo.build_complexity_multiplier <= engine.build_complexity_multiplier);
        }
    }
}
