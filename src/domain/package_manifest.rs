//! Pure `package.json` mutation: pinned dependencies and build/dev scripts.

use std::path::PathBuf;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{AppError, ScaffoldConfig};

/// Reasons a `package.json` cannot be updated.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),
    #[error("root is not a JSON object")]
    RootNotObject,
    #[error("\"{0}\" must be an object")]
    SectionNotObject(&'static str),
}

impl ManifestError {
    /// Attach the manifest path.
    pub fn at(self, path: impl Into<PathBuf>) -> AppError {
        AppError::PackageJsonInvalid { path: path.into(), details: self.to_string() }
    }
}

/// Runtime dependencies every scaffolded project gets.
pub const DEPENDENCIES: &[(&str, &str)] = &[
    ("@remix-pwa/sw", "^1.0.5"),
    ("node-persist", "^3.1.0"),
    ("web-push", "^3.4.5"),
    ("npm-run-all", "^4.1.5"),
    ("cross-env", "^7.0.3"),
    ("dotenv", "^16.0.0"),
];

/// Extra dependencies for the workbox-based worker.
pub const WORKBOX_DEPENDENCIES: &[(&str, &str)] =
    &[("workbox-routing", "^6.5.4"), ("workbox-strategies", "^6.5.4")];

pub const DEV_DEPENDENCIES: &[(&str, &str)] =
    &[("@types/node-persist", "^3.1.2"), ("esbuild", "^0.17.6")];

/// Parse `package.json` content into its root object.
pub fn parse(content: &str) -> Result<Map<String, Value>, ManifestError> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        _ => Err(ManifestError::RootNotObject),
    }
}

/// Pretty-print with two-space indentation and a trailing newline.
pub fn render(manifest: &Map<String, Value>) -> Result<String, AppError> {
    let mut out = serde_json::to_string_pretty(manifest)?;
    out.push('\n');
    Ok(out)
}

/// The `(name, command)` pairs written into `scripts`.
pub fn scripts(config: &ScaffoldConfig) -> Vec<(&'static str, String)> {
    let entry = worker_entry(config);
    vec![
        ("build", "npm-run-all -p build:*".to_string()),
        ("build:remix", "cross-env NODE_ENV=production remix build".to_string()),
        (
            "build:worker",
            format!(
                "esbuild {} --outfile=./public/entry.worker.js --minify --bundle --format=esm --define:process.env.NODE_ENV='\"production\"'",
                entry
            ),
        ),
        ("dev", "npm-run-all -p dev:*".to_string()),
        ("dev:remix", "cross-env NODE_ENV=development remix dev".to_string()),
        (
            "dev:worker",
            format!(
                "esbuild {} --outfile=./public/entry.worker.js --bundle --format=esm --define:process.env.NODE_ENV='\"development\"' --watch",
                entry
            ),
        ),
    ]
}

/// Add the PWA dependencies and scripts, preserving every unrelated key.
pub fn apply(
    manifest: &mut Map<String, Value>,
    config: &ScaffoldConfig,
) -> Result<(), ManifestError> {
    let mut dependencies: Vec<(&str, String)> =
        DEPENDENCIES.iter().map(|(name, version)| (*name, version.to_string())).collect();
    if config.workbox {
        dependencies
            .extend(WORKBOX_DEPENDENCIES.iter().map(|(name, version)| (*name, version.to_string())));
    }
    let dev_dependencies: Vec<(&str, String)> =
        DEV_DEPENDENCIES.iter().map(|(name, version)| (*name, version.to_string())).collect();

    pin(manifest, "dependencies", dependencies)?;
    pin(manifest, "devDependencies", dev_dependencies)?;
    pin(manifest, "scripts", scripts(config))?;
    Ok(())
}

/// Major version of `name` as pinned in `dependencies` or `devDependencies`.
///
/// Range operators are ignored; unparseable specs (tags, URLs) yield `None`.
pub fn dependency_major(manifest: &Map<String, Value>, name: &str) -> Option<u64> {
    ["dependencies", "devDependencies"].iter().find_map(|section| {
        let spec = manifest.get(*section)?.get(name)?.as_str()?;
        let version = spec.trim_start_matches(['^', '~', '>', '<', '=', 'v', ' ']);
        let digits: String = version.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    })
}

fn pin(
    manifest: &mut Map<String, Value>,
    section: &'static str,
    entries: Vec<(&str, String)>,
) -> Result<(), ManifestError> {
    let table = manifest.entry(section).or_insert_with(|| Value::Object(Map::new()));
    if table.is_null() {
        *table = Value::Object(Map::new());
    }
    let table = table.as_object_mut().ok_or(ManifestError::SectionNotObject(section))?;
    for (name, value) in entries {
        table.insert(name.to_string(), Value::String(value));
    }
    Ok(())
}

fn worker_entry(config: &ScaffoldConfig) -> String {
    format!("./{}", config.worker_entry_path())
}
