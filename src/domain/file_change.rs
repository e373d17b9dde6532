use std::fmt;

/// What a pipeline stage did to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Created,
    Overwritten,
    Skipped,
    Spliced,
    Appended,
    Updated,
}

impl ChangeAction {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeAction::Created => "Creating",
            ChangeAction::Overwritten => "Overwriting",
            ChangeAction::Skipped => "Skipping",
            ChangeAction::Spliced => "Spliced",
            ChangeAction::Appended => "Appended",
            ChangeAction::Updated => "Updated",
        }
    }

    /// Whether the file on disk changed.
    pub fn is_write(&self) -> bool {
        !matches!(self, ChangeAction::Skipped)
    }
}

/// A file touched (or deliberately left alone) during scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path relative to the project root.
    pub path: String,
    pub action: ChangeAction,
}

impl FileChange {
    pub fn new(path: impl Into<String>, action: ChangeAction) -> Self {
        Self { path: path.into(), action }
    }
}

impl fmt::Display for FileChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action.label(), self.path)
    }
}
