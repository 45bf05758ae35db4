crate::define_id_enum! {
    /// CMS / e-commerce provider identifier with support for
    /// runtime-registered providers
    ProviderId {
        Sanity => "sanity" : "Sanity",
        Contentful => "contentful" : "Contentful",
        Decap => "decap" : "Decap CMS",
        Tina => "tina" : "TinaCMS",
        Strapi => "strapi" : "Strapi",
        Snipcart => "snipcart" : "Snipcart",
        Foxy => "foxy" : "Foxy.io",
        Shopify => "shopify" : "Shopify Basic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id_serialization() {
        assert_eq!(
            serde_json::to_string(&ProviderId::Sanity).unwrap(),
            "\"sanity\""
        );
        assert_eq!(
            serde_json::to_string(&ProviderId::Snipcart).unwrap(),
            "\"snipcart\""
        );
    }

    #[test]
    fn test_provider_id_parse_known() {
        assert_eq!(ProviderId::parse("decap"), ProviderId::Decap);
        assert_eq!(ProviderId::parse("shopify"), ProviderId::Shopify);
    }

    #[test]
    fn test_provider_id_parse_unknown() {
        let parsed = ProviderId::parse("does-not-exist");
        assert_eq!(parsed, ProviderId::Custom("does-not-exist".to_string()));
    }

    #[test]
    fn test_provider_id_name() {
        assert_eq!(ProviderId::Decap.name(), "Decap CMS");
        assert_eq!(ProviderId::Foxy.name(), "Foxy.io");
    }
}
