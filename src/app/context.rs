use crate::ports::{ProjectFilesystem, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, T: TemplateStore> {
    project: F,
    templates: T,
}

impl<F: ProjectFilesystem, T: TemplateStore> AppContext<F, T> {
    /// Create a new application context.
    pub fn new(project: F, templates: T) -> Self {
        Self { project, templates }
    }

    /// Get a reference to the target project filesystem.
    pub fn project(&self) -> &F {
        &self.project
    }

    /// Get a reference to the template bundle.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
