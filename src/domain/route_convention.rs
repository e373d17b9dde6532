use std::sync::LazyLock;

use regex::Regex;

/// Remix config files checked for the v2 route flag, in lookup order.
pub const REMIX_CONFIG_FILES: [&str; 3] = ["remix.config.js", "remix.config.mjs", "remix.config.cjs"];

static V2_ROUTE_FLAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["']?v2_routeConvention["']?\s*:\s*(true|false)\b"#)
        .expect("route flag pattern is valid")
});

/// File naming scheme for Remix route modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteConvention {
    /// `routes/resources/subscribe.ts`
    #[default]
    Nested,
    /// `routes/resources.subscribe.ts` (v2 flat routes)
    Flat,
}

impl RouteConvention {
    /// Path of a resource route module relative to the app directory.
    pub fn resource_route(&self, name: &str, ext: &str) -> String {
        match self {
            RouteConvention::Nested => format!("routes/resources/{}.{}", name, ext),
            RouteConvention::Flat => format!("routes/resources.{}.{}", name, ext),
        }
    }

    /// Relative prefix from a resource route module back to the app directory.
    pub fn app_dir_prefix(&self) -> &'static str {
        match self {
            RouteConvention::Nested => "../../",
            RouteConvention::Flat => "../",
        }
    }

    /// Read the `v2_routeConvention` future flag from a Remix config file, if set.
    pub fn from_remix_config(content: &str) -> Option<Self> {
        V2_ROUTE_FLAG.captures(content).map(|caps| match &caps[1] {
            "true" => RouteConvention::Flat,
            _ => RouteConvention::Nested,
        })
    }

    /// Remix 2 made flat routes the default.
    pub fn from_remix_major(major: u64) -> Self {
        if major >= 2 { RouteConvention::Flat } else { RouteConvention::Nested }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RouteConvention::Nested => "nested",
            RouteConvention::Flat => "flat",
        }
    }
}
