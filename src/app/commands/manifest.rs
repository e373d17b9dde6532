use crate::domain::{AppError, ChangeAction, FileChange, ScaffoldConfig, package_manifest};
use crate::ports::ProjectFilesystem;

/// Package descriptor at the project root.
pub const PACKAGE_JSON: &str = "package.json";

/// Pin the PWA dependencies and scripts in `package.json`.
pub fn execute(
    project: &impl ProjectFilesystem,
    config: &ScaffoldConfig,
) -> Result<FileChange, AppError> {
    if !project.file_exists(PACKAGE_JSON) {
        return Err(AppError::PackageJsonMissing(project.resolve_path(PACKAGE_JSON)));
    }

    let content = project.read_file(PACKAGE_JSON)?;
    let invalid = |err: package_manifest::ManifestError| err.at(project.resolve_path(PACKAGE_JSON));

    let mut manifest = package_manifest::parse(&content).map_err(invalid)?;
    package_manifest::apply(&mut manifest, config).map_err(invalid)?;
    let rendered = package_manifest::render(&manifest)?;

    if rendered == content {
        return Ok(FileChange::new(PACKAGE_JSON, ChangeAction::Skipped));
    }
    project.write_file(PACKAGE_JSON, &rendered)?;
    Ok(FileChange::new(PACKAGE_JSON, ChangeAction::Updated))
}
