use crate::app::AppContext;
use crate::domain::template_plan::{self, CopyEntry, CopyPolicy};
use crate::domain::{AppError, ChangeAction, FileChange, ScaffoldConfig};
use crate::ports::{ProjectFilesystem, TemplateStore};

/// Copy the template files of every enabled feature into the project.
pub fn execute<F, T>(
    ctx: &AppContext<F, T>,
    config: &ScaffoldConfig,
) -> Result<Vec<FileChange>, AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
{
    let icons = ctx.templates().icon_names();
    template_plan::copy_plan(config, &icons).iter().map(|entry| copy_entry(ctx, entry)).collect()
}

fn copy_entry<F, T>(ctx: &AppContext<F, T>, entry: &CopyEntry) -> Result<FileChange, AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
{
    let project = ctx.project();
    let exists = project.file_exists(&entry.destination);

    if exists {
        let skip = match entry.policy {
            CopyPolicy::Overwrite => false,
            CopyPolicy::SkipIfExists => true,
            CopyPolicy::SkipIfContains => {
                let template = ctx.templates().text(&entry.template)?;
                project.read_file(&entry.destination)?.contains(template.trim())
            }
        };
        if skip {
            log::debug!("{} already present; leaving it alone", entry.destination);
            return Ok(FileChange::new(&entry.destination, ChangeAction::Skipped));
        }
    }

    match &entry.rewrite {
        Some(rewrite) => {
            let text = ctx.templates().text(&entry.template)?.replace(&rewrite.from, &rewrite.to);
            project.write_file(&entry.destination, &text)?;
        }
        None => project.write_bytes(&entry.destination, ctx.templates().bytes(&entry.template)?)?,
    }

    let action = if exists { ChangeAction::Overwritten } else { ChangeAction::Created };
    Ok(FileChange::new(&entry.destination, action))
}
