use std::path::Path;

use crate::domain::{AppError, PackageManager};

/// Port for running the project's package manager.
pub trait PackageInstaller {
    /// Run `<pm> install` in `project_root`, streaming output to the terminal.
    fn install(&self, package_manager: PackageManager, project_root: &Path)
    -> Result<(), AppError>;
}
