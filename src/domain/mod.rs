pub mod error;
pub mod feature;
pub mod file_change;
pub mod language;
pub mod package_manager;
pub mod package_manifest;
pub mod project_settings;
pub mod route_convention;
pub mod scaffold_config;
pub mod splice;
pub mod template_plan;

pub use error::AppError;
pub use feature::{Feature, FeatureSet};
pub use file_change::{ChangeAction, FileChange};
pub use language::{CacheStrategy, Language};
pub use package_manager::PackageManager;
pub use project_settings::{PROJECT_SETTINGS_FILE, ProjectSettings};
pub use route_convention::RouteConvention;
pub use scaffold_config::{ScaffoldConfig, normalize_app_dir};
pub use template_plan::{CopyEntry, CopyPolicy, Rewrite};
