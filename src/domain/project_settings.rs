//! Optional per-project defaults loaded from `remix-pwa.toml`.

use serde::Deserialize;

use crate::domain::{AppError, CacheStrategy, FeatureSet, Language, PackageManager};

/// File name looked up in the project root.
pub const PROJECT_SETTINGS_FILE: &str = "remix-pwa.toml";

/// Answers stored in `remix-pwa.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSettings {
    pub language: Option<Language>,
    /// Comma-separated list or array of feature ids / display names.
    #[serde(default, deserialize_with = "deserialize_features")]
    pub features: Option<FeatureSet>,
    pub cache: Option<CacheStrategy>,
    pub workbox: Option<bool>,
    pub dir: Option<String>,
    pub install: Option<bool>,
    pub package_manager: Option<PackageManager>,
}

impl ProjectSettings {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|err| AppError::ProjectConfig {
            path: PROJECT_SETTINGS_FILE.to_string(),
            details: err.to_string(),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeatureList {
    Joined(String),
    Items(Vec<String>),
}

fn deserialize_features<'de, D>(deserializer: D) -> Result<Option<FeatureSet>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let list = Option::<FeatureList>::deserialize(deserializer)?;
    let joined = match list {
        None => return Ok(None),
        Some(FeatureList::Joined(value)) => value,
        Some(FeatureList::Items(items)) => items.join(","),
    };
    FeatureSet::parse_list(&joined).map(Some).map_err(serde::de::Error::custom)
}
