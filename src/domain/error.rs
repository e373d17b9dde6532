use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for remix-pwa operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Feature identifier is not one of the known features.
    #[error(
        "Invalid feature '{0}': must be one of sw, manifest, push, utils, icons (or their display names)"
    )]
    InvalidFeature(String),

    /// Language identifier is invalid.
    #[error("Invalid language '{0}': must be ts or js")]
    InvalidLanguage(String),

    /// Cache strategy identifier is invalid.
    #[error("Invalid cache strategy '{0}': must be pre or jit")]
    InvalidCacheStrategy(String),

    /// Package manager identifier is invalid.
    #[error("Invalid package manager '{0}': must be one of npm, yarn, pnpm")]
    InvalidPackageManager(String),

    /// Project config file (remix-pwa.toml) could not be parsed.
    #[error("Failed to parse {path}: {details}")]
    ProjectConfig { path: String, details: String },

    /// Template file missing from the embedded bundle.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// File that should receive a splice does not exist in the target project.
    #[error("Cannot splice into {0}: file does not exist")]
    SpliceTargetMissing(PathBuf),

    /// Anchor pattern used to locate the insertion point is absent.
    #[error("Anchor `{anchor}` not found in {path}; file left unchanged")]
    AnchorNotFound { path: PathBuf, anchor: String },

    /// Splicing produced text that no longer parses.
    #[error("Splicing into {0} produced malformed source; file left unchanged")]
    MalformedSplice(PathBuf),

    /// Source could not be handed to the parser.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// package.json missing from the project root.
    #[error("package.json not found at {0}")]
    PackageJsonMissing(PathBuf),

    /// package.json exists but is not a JSON object.
    #[error("Invalid package.json at {path}: {details}")]
    PackageJsonInvalid { path: PathBuf, details: String },

    /// Package manager install command failed.
    #[error("`{command}` failed: {details}")]
    InstallFailed { command: String, details: String },

    /// Install was requested but no package manager could be determined.
    #[error("Could not determine a package manager. Pass --package-manager <npm|yarn|pnpm>.")]
    PackageManagerUnknown,

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// User cancelled an interactive prompt.
    #[error("Cancelled by user")]
    Cancelled,

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
