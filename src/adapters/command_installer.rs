use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::{AppError, PackageManager};
use crate::ports::PackageInstaller;

/// Runs the package manager as a child process with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct CommandInstaller;

impl CommandInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl PackageInstaller for CommandInstaller {
    fn install(
        &self,
        package_manager: PackageManager,
        project_root: &Path,
    ) -> Result<(), AppError> {
        let command_line = package_manager.install_command_line();
        log::debug!("running `{}` in {}", command_line, project_root.display());

        let status = Command::new(package_manager.command())
            .args(package_manager.install_args())
            .current_dir(project_root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| AppError::InstallFailed {
                command: command_line.clone(),
                details: err.to_string(),
            })?;

        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(AppError::InstallFailed { command: command_line, details });
        }

        Ok(())
    }
}
