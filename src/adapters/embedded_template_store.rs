use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::domain::template_plan::{ICONS_DIR, SHARED_TEMPLATE_DIR};
use crate::ports::TemplateStore;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Template bundle compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn bytes(&self, path: &str) -> Result<&[u8], AppError> {
        TEMPLATE_DIR
            .get_file(path)
            .map(|file| file.contents())
            .ok_or_else(|| AppError::TemplateNotFound(path.to_string()))
    }

    fn text(&self, path: &str) -> Result<&str, AppError> {
        let file =
            TEMPLATE_DIR.get_file(path).ok_or_else(|| AppError::TemplateNotFound(path.to_string()))?;
        file.contents_utf8().ok_or_else(|| AppError::ParseError {
            what: path.to_string(),
            details: "template is not valid UTF-8".to_string(),
        })
    }

    fn icon_names(&self) -> Vec<String> {
        let icons_dir = format!("{}/{}", SHARED_TEMPLATE_DIR, ICONS_DIR);
        let Some(dir) = TEMPLATE_DIR.get_dir(&icons_dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = dir
            .files()
            .filter_map(|file| file.path().file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}
