use std::fmt;

use serde::Deserialize;

use super::AppError;

/// Node package manager used by the target project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Detection priority order.
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    /// Executable name.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Lockfile whose presence identifies this package manager.
    pub fn lockfile(&self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Pnpm => "pnpm-lock.yaml",
        }
    }

    /// Arguments for a dependency install.
    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install", "--loglevel", "silent"],
            PackageManager::Yarn => &["install", "--silent"],
            PackageManager::Pnpm => &["install", "--silent"],
        }
    }

    /// Human-readable install command line.
    pub fn install_command_line(&self) -> String {
        format!("{} install", self.command())
    }

    pub fn parse(value: &str) -> Result<PackageManager, AppError> {
        match value.trim().to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            _ => Err(AppError::InvalidPackageManager(value.to_string())),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

impl TryFrom<String> for PackageManager {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PackageManager::parse(&value)
    }
}
