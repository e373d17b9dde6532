//! Test double for `ProjectFilesystem`.

use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `ProjectFilesystem` for unit tests.
#[derive(Clone, Debug)]
pub struct MemoryFilesystem {
    files: TestFiles,
}

impl MemoryFilesystem {
    pub fn new(files: TestFiles) -> Self {
        Self { files }
    }
}

impl ProjectFilesystem for MemoryFilesystem {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.write_bytes(path, content.as_bytes())
    }

    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        if path.split('/').any(|segment| segment == "..") {
            return Err(AppError::PathTraversal(path.to_string()));
        }
        self.files.files.lock().unwrap().insert(path.to_string(), content.to_vec());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let files = self.files.files.lock().unwrap();
        files.contains_key(path) || files.keys().any(|key| key.starts_with(&prefix))
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        PathBuf::from("/project").join(path)
    }
}
