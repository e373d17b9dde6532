mod package_installer;
mod project_filesystem;
mod prompter;
mod template_store;

pub use package_installer::PackageInstaller;
pub use project_filesystem::ProjectFilesystem;
pub use prompter::Prompter;
pub use template_store::TemplateStore;
