//! Test double for `Prompter`.

use std::sync::Mutex;

use crate::domain::{AppError, CacheStrategy, FeatureSet, Language, PackageManager};
use crate::ports::Prompter;

/// Prompter that answers from preset values and records which questions were asked.
///
/// An unset answer behaves like the user pressing Esc.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    pub language: Option<Language>,
    pub features: Option<FeatureSet>,
    pub cache: Option<CacheStrategy>,
    pub workbox: Option<bool>,
    pub app_dir: Option<String>,
    pub install: Option<bool>,
    pub package_manager: Option<PackageManager>,
    pub(crate) asked: Mutex<Vec<&'static str>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the questions asked so far, in order.
    pub fn asked(&self) -> Vec<&'static str> {
        self.asked.lock().unwrap().clone()
    }

    fn answer<T: Clone>(&self, question: &'static str, value: &Option<T>) -> Result<T, AppError> {
        self.asked.lock().unwrap().push(question);
        value.clone().ok_or(AppError::Cancelled)
    }
}

impl Prompter for ScriptedPrompter {
    fn select_language(&self) -> Result<Language, AppError> {
        self.answer("language", &self.language)
    }

    fn select_features(&self) -> Result<FeatureSet, AppError> {
        self.answer("features", &self.features)
    }

    fn select_cache(&self) -> Result<CacheStrategy, AppError> {
        self.answer("cache", &self.cache)
    }

    fn confirm_workbox(&self) -> Result<bool, AppError> {
        self.answer("workbox", &self.workbox)
    }

    fn input_app_dir(&self, _default: &str) -> Result<String, AppError> {
        self.answer("dir", &self.app_dir)
    }

    fn confirm_install(&self) -> Result<bool, AppError> {
        self.answer("install", &self.install)
    }

    fn select_package_manager(&self) -> Result<PackageManager, AppError> {
        self.answer("package_manager", &self.package_manager)
    }
}
