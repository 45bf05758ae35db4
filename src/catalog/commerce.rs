//! Built-in e-commerce provider descriptors.

use crate::provider::{ContentApi, CostRange, ProviderCategory, ProviderDescriptor, SetupComplexity};
use crate::{EngineId, ProviderId};
use std::collections::BTreeSet;

fn features(tokens: &[&str]) -> BTreeSet<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn snipcart() -> ProviderDescriptor {
    ProviderDescriptor {
        id: ProviderId::Snipcart,
        display_name: "Snipcart".to_string(),
        category: ProviderCategory::Ecommerce,
        monthly_cost_range: CostRange::new(0, 20),
        setup_cost_range: CostRange::new(400, 1000),
        supported_engines: vec![EngineId::Hugo, EngineId::Eleventy, EngineId::Astro],
        features: features(&["cart_overlay", "digital_products"]),
        setup_complexity: SetupComplexity::Low,
        content_api: ContentApi::GitBased,
        default_engine: EngineId::Hugo,
        transaction_fee_fraction: Some(0.02),
    }
}

fn foxy() -> ProviderDescriptor {
    ProviderDescriptor {
        id: ProviderId::Foxy,
        display_name: "Foxy.io".to_string(),
        category: ProviderCategory::Ecommerce,
        monthly_cost_range: CostRange::new(25, 75),
        setup_cost_range: CostRange::new(600, 1400),
        supported_engines: vec![EngineId::Hugo, EngineId::Astro, EngineId::Eleventy],
        features: features(&["subscriptions", "cart_overlay"]),
        setup_complexity: SetupComplexity::Medium,
        content_api: ContentApi::GitBased,
        default_engine: EngineId::Astro,
        transaction_fee_fraction: Some(0.015),
    }
}

fn shopify() -> ProviderDescriptor {
    ProviderDescriptor {
        id: ProviderId::Shopify,
        display_name: "Shopify Basic".to_string(),
        category: ProviderCategory::Ecommerce,
        monthly_cost_range: CostRange::new(39, 105),
        setup_cost_range: CostRange::new(1200, 3000),
        supported_engines: vec![EngineId::NextJs, EngineId::Astro, EngineId::Gatsby],
        features: features(&["subscriptions", "inventory", "payment_processing"]),
        setup_complexity: SetupComplexity::Medium,
        content_api: ContentApi::ApiDriven,
        default_engine: EngineId::NextJs,
        transaction_fee_fraction: Some(0.029),
    }
}

pub(super) fn defaults() -> Vec<ProviderDescriptor> {
    vec![snipcart(), foxy(), shopify()]
}
