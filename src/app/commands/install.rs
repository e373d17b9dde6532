use crate::domain::{AppError, PackageManager, ScaffoldConfig};
use crate::ports::PackageInstaller;

/// What happened to dependency installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// `<pm> install` ran successfully.
    Installed(PackageManager),
    /// Install was not requested; the user should run it themselves.
    Deferred(Option<PackageManager>),
}

impl InstallOutcome {
    /// Command the user should run when installation was deferred.
    pub fn reminder(&self) -> Option<String> {
        match self {
            InstallOutcome::Installed(_) => None,
            InstallOutcome::Deferred(pm) => {
                Some(pm.unwrap_or(PackageManager::Npm).install_command_line())
            }
        }
    }
}

/// Run the package manager if the user asked for it.
pub fn execute(
    installer: &impl PackageInstaller,
    config: &ScaffoldConfig,
) -> Result<InstallOutcome, AppError> {
    if !config.install {
        return Ok(InstallOutcome::Deferred(config.package_manager));
    }
    let package_manager = config.package_manager.ok_or(AppError::PackageManagerUnknown)?;
    installer.install(package_manager, &config.project_root)?;
    Ok(InstallOutcome::Installed(package_manager))
}
