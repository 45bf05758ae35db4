//! Built-in CMS provider descriptors.

use crate::provider::{ContentApi, CostRange, ProviderCategory, ProviderDescriptor, SetupComplexity};
use crate::{EngineId, ProviderId};
use std::collections::BTreeSet;

fn features(tokens: &[&str]) -> BTreeSet<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn sanity() -> ProviderDescriptor {
    ProviderDescriptor {
        id: ProviderId::Sanity,
        display_name: "Sanity".to_string(),
        category: ProviderCategory::Cms,
        monthly_cost_range: CostRange::new(0, 99),
        setup_cost_range: CostRange::new(500, 1500),
        supported_engines: vec![
            EngineId::NextJs,
            EngineId::Astro,
            EngineId::Gatsby,
            EngineId::Eleventy,
        ],
        features: features(&[
            "visual_editing",
            "realtime_collaboration",
            "localization",
            "structured_content",
        ]),
        setup_complexity: SetupComplexity::High,
        content_api: ContentApi::ApiDriven,
        default_engine: EngineId::NextJs,
        transaction_fee_fraction: None,
    }
}

fn contentful() -> ProviderDescriptor {
    ProviderDescriptor {
        id: ProviderId::Contentful,
        display_name: "Contentful".to_string(),
        category: ProviderCategory::Cms,
        monthly_cost_range: CostRange::new(0, 300),
        setup_cost_range: CostRange::new(800, 2000),
        supported_engines: vec![EngineId::NextJs, EngineId::Gatsby, EngineId::Astro],
        features: features(&["localization", "scheduling", "visual_editing"]),
        setup_complexity: SetupComplexity::Medium,
        content_api: ContentApi::ApiDriven,
        default_engine: EngineId::Gatsby,
        transaction_fee_fraction: None,
    }
}

fn decap() -> ProviderDescriptor {
    ProviderDescriptor {
        id: ProviderId::Decap,
        display_name: "Decap CMS".to_string(),
        category: ProviderCategory::Cms,
        monthly_cost_range: CostRange::new(0, 0),
        setup_cost_range: CostRange::new(300, 800),
        supported_engines: vec![EngineId::Hugo, EngineId::Eleventy, EngineId::Astro],
        features: features(&["git_workflow", "open_source"]),
        setup_complexity: SetupComplexity::Low,
        content_api: ContentApi::GitBased,
        default_engine: EngineId::Hugo,
        transaction_fee_fraction: None,
    }
}

fn tina() -> ProviderDescriptor {
    ProviderDescriptor {
        id: ProviderId::Tina,
        display_name: "TinaCMS".to_string(),
        category: ProviderCategory::Cms,
        monthly_cost_range: CostRange::new(0, 29),
        setup_cost_range: CostRange::new(400, 1000),
        supported_engines: vec![EngineId::NextJs, EngineId::Astro, EngineId::Hugo],
        features: features(&["visual_editing", "git_workflow"]),
        setup_complexity: SetupComplexity::Medium,
        content_api: ContentApi::GitBased,
        default_engine: EngineId::NextJs,
        transaction_fee_fraction: None,
    }
}

fn strapi() -> ProviderDescriptor {
    ProviderDescriptor {
        id: ProviderId::Strapi,
        display_name: "Strapi".to_string(),
        category: ProviderCategory::Cms,
        monthly_cost_range: CostRange::new(15, 99),
        setup_cost_range: CostRange::new(900, 2500),
        supported_engines: vec![
            EngineId::NextJs,
            EngineId::Astro,
            EngineId::Gatsby,
            EngineId::Eleventy,
        ],
        features: features(&["self_hosted", "localization", "webhooks"]),
        setup_complexity: SetupComplexity::High,
        content_api: ContentApi::ApiDriven,
        default_engine: EngineId::NextJs,
        transaction_fee_fraction: None,
    }
}

pub(super) fn defaults() -> Vec<ProviderDescriptor> {
    vec![sanity(), contentful(), decap(), tina(), strapi()]
}
