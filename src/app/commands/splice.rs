//! Splices the navigation effect into the root layout and bootstrap code into the client entry.

use crate::app::AppContext;
use crate::domain::splice::{self, Dialect, PUSH_SUBSCRIPTION, SpliceOutcome, WORKER_REGISTRATION};
use crate::domain::{AppError, ChangeAction, Feature, FileChange, ScaffoldConfig};
use crate::ports::{ProjectFilesystem, TemplateStore};

/// Run both splices for the enabled features.
pub fn execute<F, T>(
    ctx: &AppContext<F, T>,
    config: &ScaffoldConfig,
) -> Result<Vec<FileChange>, AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
{
    let mut changes = Vec::new();
    if config.has(Feature::ServiceWorkers) {
        changes.push(splice_root_layout(ctx, config)?);
    }
    if config.has(Feature::ServiceWorkers) || config.has(Feature::PushNotifications) {
        changes.push(splice_client_entry(ctx, config)?);
    }
    Ok(changes)
}

/// Insert the navigation effect right before the root layout's `return ( <html`.
pub fn splice_root_layout<F, T>(
    ctx: &AppContext<F, T>,
    config: &ScaffoldConfig,
) -> Result<FileChange, AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
{
    let path = config.root_layout_path();
    let source = read_target(ctx.project(), &path)?;
    let lang = config.language.module_ext();
    let fragment = ctx.templates().text(&format!("{}/app/root.{}", lang, lang))?;

    match splice::splice_root_layout(&source, fragment, Dialect::from(config.language))
        .map_err(|err| err.at(ctx.project().resolve_path(&path)))?
    {
        SpliceOutcome::Inserted(content) => {
            ctx.project().write_file(&path, &content)?;
            Ok(FileChange::new(path, ChangeAction::Spliced))
        }
        SpliceOutcome::AlreadyPresent => {
            log::debug!("{} already has the navigation effect", path);
            Ok(FileChange::new(path, ChangeAction::Skipped))
        }
    }
}

/// Append worker registration and push subscription code to the client entry.
pub fn splice_client_entry<F, T>(
    ctx: &AppContext<F, T>,
    config: &ScaffoldConfig,
) -> Result<FileChange, AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
{
    let path = config.client_entry_path();
    let original = read_target(ctx.project(), &path)?;
    let lang = config.language.module_ext();

    let mut fragments = Vec::new();
    if config.has(Feature::ServiceWorkers) {
        fragments.push((WORKER_REGISTRATION, format!("{}/app/entry.client.{}", lang, lang)));
    }
    if config.has(Feature::PushNotifications) {
        fragments.push((PUSH_SUBSCRIPTION, format!("{}/app/push.entry.client.{}", lang, lang)));
    }

    let mut content = original.clone();
    for (sentinel, template) in fragments {
        let fragment = ctx.templates().text(&template)?;
        if let SpliceOutcome::Inserted(updated) = splice::append_fragment(&content, fragment, sentinel)
        {
            content = updated;
        }
    }

    if content == original {
        log::debug!("{} already has the client bootstrap", path);
        return Ok(FileChange::new(path, ChangeAction::Skipped));
    }
    ctx.project().write_file(&path, &content)?;
    Ok(FileChange::new(path, ChangeAction::Appended))
}

fn read_target(project: &impl ProjectFilesystem, path: &str) -> Result<String, AppError> {
    if !project.file_exists(path) {
        return Err(AppError::SpliceTargetMissing(project.resolve_path(path)));
    }
    project.read_file(path)
}
