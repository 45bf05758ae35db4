crate::define_id_enum! {
    /// SSG engine identifier with support for runtime-registered engines
    EngineId {
        Hugo => "hugo" : "Hugo",
        Eleventy => "eleventy" : "Eleventy",
        Astro => "astro" : "Astro",
        NextJs => "nextjs" : "Next.js",
        Gatsby => "gatsby" : "Gatsby",
    }
}
