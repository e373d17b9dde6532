//! The scaffolding pipeline: copy templates, splice sources, update `package.json`.

use crate::app::AppContext;
use crate::domain::{AppError, FileChange, ScaffoldConfig};
use crate::ports::{ProjectFilesystem, TemplateStore};

use super::{copy, manifest, splice};

/// Apply every file stage in order. The first error aborts the run; files
/// written by earlier stages stay in place.
pub fn execute<F, T>(
    ctx: &AppContext<F, T>,
    config: &ScaffoldConfig,
) -> Result<Vec<FileChange>, AppError>
where
    F: ProjectFilesystem,
    T: TemplateStore,
{
    log::debug!(
        "scaffolding {} ({}, features: {}, {} routes)",
        config.project_root.display(),
        config.language,
        config.features,
        config.route_convention.label()
    );

    let mut changes = copy::execute(ctx, config)?;
    changes.extend(splice::execute(ctx, config)?);
    changes.push(manifest::execute(ctx.project(), config)?);
    Ok(changes)
}
