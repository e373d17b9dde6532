use crate::domain::{AppError, CacheStrategy, FeatureSet, Language, PackageManager};

/// Port for the interactive questions asked while resolving options.
///
/// Every method returns `AppError::Cancelled` when the user backs out.
pub trait Prompter {
    fn select_language(&self) -> Result<Language, AppError>;

    fn select_features(&self) -> Result<FeatureSet, AppError>;

    fn select_cache(&self) -> Result<CacheStrategy, AppError>;

    fn confirm_workbox(&self) -> Result<bool, AppError>;

    fn input_app_dir(&self, default: &str) -> Result<String, AppError>;

    fn confirm_install(&self) -> Result<bool, AppError>;

    fn select_package_manager(&self) -> Result<PackageManager, AppError>;
}
