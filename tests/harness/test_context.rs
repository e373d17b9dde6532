//! Shared testing harness for `remix-pwa` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::remix_fixture;

/// Isolated Remix project in a temp directory.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create an empty project directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");
        Self { root, work_dir }
    }

    /// TypeScript Remix project with `package.json`, `app/root.tsx` and `app/entry.client.tsx`.
    pub(crate) fn typescript_project() -> Self {
        let ctx = Self::new();
        ctx.write("package.json", remix_fixture::PACKAGE_JSON);
        ctx.write("app/root.tsx", remix_fixture::ROOT_TSX);
        ctx.write("app/entry.client.tsx", remix_fixture::ENTRY_CLIENT_TSX);
        ctx
    }

    /// JavaScript Remix project.
    pub(crate) fn javascript_project() -> Self {
        let ctx = Self::new();
        ctx.write("package.json", remix_fixture::PACKAGE_JSON);
        ctx.write("app/root.jsx", remix_fixture::ROOT_JSX);
        ctx.write("app/entry.client.jsx", remix_fixture::ENTRY_CLIENT_JSX);
        ctx
    }

    /// Path to the project root.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `remix-pwa` binary in the project root.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("remix-pwa").expect("Failed to locate remix-pwa binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a project file, creating parent directories.
    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }

    /// Read a project file.
    pub(crate) fn read(&self, relative: &str) -> String {
        let path = self.work_dir.join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", path.display(), err))
    }

    pub(crate) fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }

    /// Parse `package.json`.
    pub(crate) fn package_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read("package.json")).expect("package.json should be valid JSON")
    }

    /// Every file under the project root with its content, sorted by path.
    pub(crate) fn snapshot(&self) -> Vec<(PathBuf, Vec<u8>)> {
        let mut files = Vec::new();
        collect(&self.work_dir, &self.work_dir, &mut files);
        files.sort();
        files
    }
}

fn collect(root: &Path, dir: &Path, files: &mut Vec<(PathBuf, Vec<u8>)>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read directory entry").path();
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            let relative = path.strip_prefix(root).expect("path under root").to_path_buf();
            files.push((relative, fs::read(&path).expect("Failed to read file")));
        }
    }
}
