use std::path::PathBuf;

use super::{CacheStrategy, Feature, FeatureSet, Language, PackageManager, RouteConvention};

/// Fully resolved options for one scaffolding run.
///
/// Built once by the option resolver and read by every later stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Absolute project root the run operates on.
    pub project_root: PathBuf,
    pub language: Language,
    pub cache: CacheStrategy,
    pub workbox: bool,
    pub features: FeatureSet,
    /// App directory relative to the project root (normally `app`).
    pub app_dir: String,
    pub install: bool,
    pub package_manager: Option<PackageManager>,
    pub route_convention: RouteConvention,
}

impl ScaffoldConfig {
    pub fn has(&self, feature: Feature) -> bool {
        self.features.contains(feature)
    }

    /// Path relative to the project root for a file inside the app directory.
    pub fn app_path(&self, relative: &str) -> String {
        if self.app_dir.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{}", self.app_dir, relative)
        }
    }

    /// `app/root.tsx` or `app/root.jsx`.
    pub fn root_layout_path(&self) -> String {
        self.app_path(&format!("root.{}", self.language.component_ext()))
    }

    /// `app/entry.client.tsx` or `app/entry.client.jsx`.
    pub fn client_entry_path(&self) -> String {
        self.app_path(&format!("entry.client.{}", self.language.component_ext()))
    }

    /// Destination of the generated service worker entry.
    pub fn worker_entry_path(&self) -> String {
        self.app_path(&format!("entry.worker.{}", self.language.module_ext()))
    }
}

/// Normalize a user-supplied app directory: forward slashes, no `./` prefix, no trailing slash.
pub fn normalize_app_dir(dir: &str) -> String {
    let replaced = dir.trim().replace('\\', "/");
    let mut value = replaced.as_str();
    while let Some(rest) = value.strip_prefix("./") {
        value = rest;
    }
    let value = value.trim_end_matches('/');
    if value == "." { String::new() } else { value.to_string() }
}
