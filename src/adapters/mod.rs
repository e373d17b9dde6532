mod command_installer;
mod dialoguer_prompter;
mod embedded_template_store;
pub mod filesystem;

pub use command_installer::CommandInstaller;
pub use dialoguer_prompter::DialoguerPrompter;
pub use embedded_template_store::EmbeddedTemplateStore;
pub use filesystem::FilesystemStore;
