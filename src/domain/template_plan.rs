//! Static mapping from enabled features to template files and their destinations.

use super::{CacheStrategy, Feature, ScaffoldConfig};

/// Directory inside the template bundle holding language-independent assets.
pub const SHARED_TEMPLATE_DIR: &str = "shared";

/// Template path (relative to the language bundle) of the icon directory.
pub const ICONS_DIR: &str = "public/icons";

/// What to do when the destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPolicy {
    /// Always write the template.
    Overwrite,
    /// Leave an existing destination alone.
    SkipIfExists,
    /// Leave an existing destination alone only if it already contains the template text.
    SkipIfContains,
}

/// Literal substitution applied to template text before it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub from: String,
    pub to: String,
}

/// One template file to copy into the target project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyEntry {
    pub feature: Feature,
    /// Path inside the embedded template bundle.
    pub template: String,
    /// Path relative to the project root.
    pub destination: String,
    pub policy: CopyPolicy,
    pub rewrite: Option<Rewrite>,
}

/// Template file name (without extension) for the chosen worker flavour.
pub fn worker_template(cache: CacheStrategy, workbox: bool) -> &'static str {
    match (cache, workbox) {
        (CacheStrategy::JustInTime, false) => "entry.worker",
        (CacheStrategy::Precache, false) => "precache.worker",
        (CacheStrategy::JustInTime, true) => "entry.workbox",
        (CacheStrategy::Precache, true) => "precache.workbox",
    }
}

/// Build the copy plan for `config`.
///
/// `icons` lists icon file names available in the shared bundle.
pub fn copy_plan(config: &ScaffoldConfig, icons: &[String]) -> Vec<CopyEntry> {
    let lang = config.language.module_ext();
    let convention = config.route_convention;
    let mut entries = Vec::new();

    for feature in config.features.iter() {
        match feature {
            Feature::DevelopmentIcons => {
                for icon in icons {
                    entries.push(CopyEntry {
                        feature,
                        template: format!("{}/{}/{}", SHARED_TEMPLATE_DIR, ICONS_DIR, icon),
                        destination: format!("{}/{}", ICONS_DIR, icon),
                        policy: CopyPolicy::Overwrite,
                        rewrite: None,
                    });
                }
            }
            Feature::WebManifest => entries.push(CopyEntry {
                feature,
                template: format!("{}/app/routes/resources/manifest[.]webmanifest.{}", lang, lang),
                destination: config
                    .app_path(&convention.resource_route("manifest[.]webmanifest", lang)),
                policy: CopyPolicy::SkipIfExists,
                rewrite: None,
            }),
            Feature::PushNotifications => {
                let prefix = convention.app_dir_prefix();
                entries.push(CopyEntry {
                    feature,
                    template: format!("{}/app/routes/resources/subscribe.{}", lang, lang),
                    destination: config.app_path(&convention.resource_route("subscribe", lang)),
                    policy: CopyPolicy::SkipIfExists,
                    rewrite: (prefix != "../../").then(|| Rewrite {
                        from: "\"../../utils/".to_string(),
                        to: format!("\"{}utils/", prefix),
                    }),
                });
                entries.push(CopyEntry {
                    feature,
                    template: format!("{}/app/utils/server/pwa-utils.server.{}", lang, lang),
                    destination: config.app_path(&format!("utils/server/pwa-utils.server.{}", lang)),
                    policy: CopyPolicy::Overwrite,
                    rewrite: None,
                });
            }
            Feature::ClientUtilities => entries.push(CopyEntry {
                feature,
                template: format!("{}/app/utils/client/pwa-utils.client.{}", lang, lang),
                destination: config.app_path(&format!("utils/client/pwa-utils.client.{}", lang)),
                policy: CopyPolicy::Overwrite,
                rewrite: None,
            }),
            Feature::ServiceWorkers => entries.push(CopyEntry {
                feature,
                template: format!(
                    "{}/app/{}.{}",
                    lang,
                    worker_template(config.cache, config.workbox),
                    lang
                ),
                destination: config.worker_entry_path(),
                policy: CopyPolicy::SkipIfContains,
                rewrite: None,
            }),
        }
    }

    entries
}
