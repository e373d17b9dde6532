//! Test double for `PackageInstaller`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, PackageManager};
use crate::ports::PackageInstaller;

/// Records install invocations instead of spawning a process.
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    pub calls: Mutex<Vec<(PackageManager, PathBuf)>>,
    pub fail: bool,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(
        &self,
        package_manager: PackageManager,
        project_root: &Path,
    ) -> Result<(), AppError> {
        self.calls.lock().unwrap().push((package_manager, project_root.to_path_buf()));
        if self.fail {
            return Err(AppError::InstallFailed {
                command: package_manager.install_command_line(),
                details: "exited with status 1".to_string(),
            });
        }
        Ok(())
    }
}
