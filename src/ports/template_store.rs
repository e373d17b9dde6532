use crate::domain::AppError;

/// Port for the read-only template bundle.
///
/// Paths are relative to the bundle root, e.g. `ts/app/entry.worker.ts`.
pub trait TemplateStore {
    /// Raw bytes of a template file.
    fn bytes(&self, path: &str) -> Result<&[u8], AppError>;

    /// Template file as UTF-8 text.
    fn text(&self, path: &str) -> Result<&str, AppError>;

    /// File names directly under the shared icon directory, sorted.
    fn icon_names(&self) -> Vec<String>;
}
