//! API Facade for the application.
//!
//! Glues context creation to command execution for the CLI and for embedding.

use std::path::{Path, PathBuf};

use crate::adapters::{CommandInstaller, DialoguerPrompter, EmbeddedTemplateStore, FilesystemStore};
use crate::app::AppContext;
use crate::app::commands;

pub use crate::app::commands::install::InstallOutcome;
pub use crate::app::commands::resolve::ScaffoldOptions;
pub use crate::domain::{AppError, FileChange, ScaffoldConfig};

/// Documentation for the generated PWA code.
pub const DOCS_URL: &str = "https://remix-pwa-docs.vercel.app";

fn create_context(path: PathBuf) -> AppContext<FilesystemStore, EmbeddedTemplateStore> {
    AppContext::new(FilesystemStore::new(path), EmbeddedTemplateStore::new())
}

fn ensure_project_dir(path: &Path) -> Result<(), AppError> {
    if !path.is_dir() {
        return Err(AppError::config_error(format!(
            "Project directory {} does not exist",
            path.display()
        )));
    }
    Ok(())
}

/// Resolve options for the project at `path`, prompting on the terminal for anything missing.
pub fn resolve_config_at(
    path: impl Into<PathBuf>,
    options: ScaffoldOptions,
) -> Result<ScaffoldConfig, AppError> {
    let path = path.into();
    ensure_project_dir(&path)?;
    let project = FilesystemStore::new(path.clone());
    commands::resolve::resolve(&project, path, options, &DialoguerPrompter::new())
}

/// Copy templates, splice sources and update `package.json` for a resolved config.
pub fn scaffold(config: &ScaffoldConfig) -> Result<Vec<FileChange>, AppError> {
    ensure_project_dir(&config.project_root)?;
    let ctx = create_context(config.project_root.clone());
    commands::scaffold::execute(&ctx, config)
}

/// Run the package manager if the config asks for it.
pub fn install(config: &ScaffoldConfig) -> Result<InstallOutcome, AppError> {
    commands::install::execute(&CommandInstaller::new(), config)
}

/// Resolve and scaffold the project at `path` in one step, without installing.
pub fn scaffold_at(
    path: impl Into<PathBuf>,
    options: ScaffoldOptions,
) -> Result<Vec<FileChange>, AppError> {
    let config = resolve_config_at(path, options)?;
    scaffold(&config)
}
