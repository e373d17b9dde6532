//! Shared in-memory file backing store for test doubles.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// In-memory project tree keyed by root-relative path.
///
/// Tests seed files through this handle, hand a `MemoryFilesystem` over it to
/// production code, then inspect the result through the same handle.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a text file.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.as_bytes().to_vec());
    }

    /// Text content of a file, if present.
    pub fn get(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    /// All stored paths, sorted.
    pub fn paths(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}
