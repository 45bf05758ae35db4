//! Template variant resolution and build-environment configuration.
//!
//! Both surfaces are pure data transformations over static tables. The
//! curated variant table wins over the `{provider}_generic` fallback;
//! there are no other precedence rules, and resolution is total for any
//! pair that has passed compatibility validation.

use crate::{EngineId, ProviderId};
use serde::{Deserialize, Serialize};

/// Curated (engine, provider) → template variant pairs. Pairs absent
/// from this table resolve to the generic fallback.
const VARIANT_TABLE: &[(&str, &str, &str)] = &[
    ("hugo", "snipcart", "hugo_snipcart_storefront"),
    ("hugo", "decap", "hugo_decap_docs"),
    ("eleventy", "decap", "eleventy_decap_blog"),
    ("astro", "decap", "astro_decap_blog"),
    ("astro", "snipcart", "astro_snipcart_storefront"),
    ("astro", "sanity", "astro_sanity_content"),
    ("nextjs", "sanity", "nextjs_sanity_studio"),
    ("nextjs", "contentful", "nextjs_contentful_marketing"),
    ("nextjs", "tina", "nextjs_tina_editorial"),
    ("nextjs", "shopify", "nextjs_shopify_headless"),
    ("gatsby", "contentful", "gatsby_contentful_marketing"),
];

/// Resolves the template variant for a validated pairing.
///
/// Exact pair match wins; otherwise `{provider}_generic`. Never returns
/// an empty string.
pub fn resolve_variant(engine: &EngineId, provider: &ProviderId) -> String {
    VARIANT_TABLE
        .iter()
        .find(|(e, p, _)| *e == engine.as_str() && *p == provider.as_str())
        .map(|(_, _, variant)| variant.to_string())
        .unwrap_or_else(|| format!("{provider}_generic"))
}

/// What a build-environment entry configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvPurpose {
    /// Toolchain pins and build-time switches.
    Build,
    /// Content-delivery endpoints and tokens.
    Content,
    /// Cart and payment configuration.
    Commerce,
}

/// One build-environment entry handed to the provisioning layer.
/// `{{...}}` values are placeholders the caller substitutes per client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
    pub purpose: EnvPurpose,
}

enum EnvScope {
    Engine(&'static str),
    Provider(&'static str),
}

struct EnvRow {
    scope: EnvScope,
    purpose: EnvPurpose,
    key: &'static str,
    value: &'static str,
}

const fn engine_row(engine: &'static str, key: &'static str, value: &'static str) -> EnvRow {
    EnvRow {
        scope: EnvScope::Engine(engine),
        purpose: EnvPurpose::Build,
        key,
        value,
    }
}

const fn provider_row(
    provider: &'static str,
    purpose: EnvPurpose,
    key: &'static str,
    value: &'static str,
) -> EnvRow {
    EnvRow {
        scope: EnvScope::Provider(provider),
        purpose,
        key,
        value,
    }
}

/// Single configuration table for every engine- and provider-scoped
/// variable, replacing per-pairing copies of near-identical blocks.
static ENV_TABLE: &[EnvRow] = &[
    // Engine toolchains
    engine_row("hugo", "HUGO_VERSION", "0.121.0"),
    engine_row("hugo", "HUGO_ENV", "production"),
    engine_row("eleventy", "NODE_VERSION", "20"),
    engine_row("eleventy", "ELEVENTY_ENV", "production"),
    engine_row("astro", "NODE_VERSION", "20"),
    engine_row("nextjs", "NODE_VERSION", "20"),
    engine_row("nextjs", "NEXT_TELEMETRY_DISABLED", "1"),
    engine_row("gatsby", "NODE_VERSION", "20"),
    engine_row("gatsby", "GATSBY_TELEMETRY_DISABLED", "1"),
    // Content providers
    provider_row("sanity", EnvPurpose::Content, "SANITY_PROJECT_ID", "{{sanity_project_id}}"),
    provider_row("sanity", EnvPurpose::Content, "SANITY_DATASET", "production"),
    provider_row("contentful", EnvPurpose::Content, "CONTENTFUL_SPACE_ID", "{{contentful_space_id}}"),
    provider_row("contentful", EnvPurpose::Content, "CONTENTFUL_DELIVERY_TOKEN", "{{contentful_delivery_token}}"),
    provider_row("decap", EnvPurpose::Content, "DECAP_BACKEND", "git-gateway"),
    provider_row("tina", EnvPurpose::Content, "TINA_CLIENT_ID", "{{tina_client_id}}"),
    provider_row("tina", EnvPurpose::Content, "TINA_TOKEN", "{{tina_token}}"),
    provider_row("strapi", EnvPurpose::Content, "STRAPI_API_URL", "{{strapi_api_url}}"),
    provider_row("strapi", EnvPurpose::Content, "STRAPI_API_TOKEN", "{{strapi_api_token}}"),
    // Commerce providers
    provider_row("snipcart", EnvPurpose::Commerce, "SNIPCART_API_KEY", "{{snipcart_api_key}}"),
    provider_row("snipcart", EnvPurpose::Commerce, "SNIPCART_CURRENCY", "usd"),
    provider_row("foxy", EnvPurpose::Commerce, "FOXY_SUBDOMAIN", "{{foxy_subdomain}}"),
    provider_row("shopify", EnvPurpose::Commerce, "SHOPIFY_STORE_DOMAIN", "{{shopify_store_domain}}"),
    provider_row("shopify", EnvPurpose::Commerce, "SHOPIFY_STOREFRONT_TOKEN", "{{shopify_storefront_token}}"),
];

/// Build-environment entries for a resolved pairing: engine-scoped rows
/// first, then provider-scoped rows, each in table order.
pub fn build_env(engine: &EngineId, provider: &ProviderId) -> Vec<EnvVar> {
    let mut env = Vec::new();
    for want_engine_scope in [true, false] {
        for row in ENV_TABLE {
            let applies = match row.scope {
                EnvScope::Engine(token) => want_engine_scope && token == engine.as_str(),
                EnvScope::Provider(token) => !want_engine_scope && token == provider.as_str(),
            };
            if applies {
                env.push(EnvVar {
                    key: row.key.to_string(),
                    value: row.value.to_string(),
                    purpose: row.purpose,
                });
            }
        }
    }
    env
}
