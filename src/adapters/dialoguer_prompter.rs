use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, MultiSelect, Select};

use crate::domain::{AppError, CacheStrategy, Feature, FeatureSet, Language, PackageManager};
use crate::ports::Prompter;

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(what: &str, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => AppError::Cancelled,
        err => AppError::Prompt(format!("Failed to read {}: {}", what, err)),
    }
}

fn select_one(prompt: &str, items: &[&str], what: &str) -> Result<usize, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(|err| prompt_error(what, err))?
        .ok_or(AppError::Cancelled)
}

fn confirm(prompt: &str, default: bool, what: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact_opt()
        .map_err(|err| prompt_error(what, err))?
        .ok_or(AppError::Cancelled)
}

impl Prompter for DialoguerPrompter {
    fn select_language(&self) -> Result<Language, AppError> {
        let items: Vec<&str> = Language::ALL.iter().map(|lang| lang.display_name()).collect();
        let index = select_one("Is this a TypeScript or JavaScript project?", &items, "language")?;
        Ok(Language::ALL[index])
    }

    fn select_features(&self) -> Result<FeatureSet, AppError> {
        let items: Vec<&str> = Feature::ALL.iter().map(|feature| feature.display_name()).collect();
        let defaults = vec![true; items.len()];
        let chosen = MultiSelect::new()
            .with_prompt("What features of remix-pwa do you need?")
            .items(&items)
            .defaults(&defaults)
            .interact_opt()
            .map_err(|err| prompt_error("features", err))?
            .ok_or(AppError::Cancelled)?;
        Ok(FeatureSet::new(chosen.into_iter().map(|index| Feature::ALL[index])))
    }

    fn select_cache(&self) -> Result<CacheStrategy, AppError> {
        let items: Vec<&str> =
            CacheStrategy::ALL.iter().map(|strategy| strategy.display_name()).collect();
        let index = select_one(
            "What caching strategy do you want to use? Check out the docs for more info.",
            &items,
            "cache strategy",
        )?;
        Ok(CacheStrategy::ALL[index])
    }

    fn confirm_workbox(&self) -> Result<bool, AppError> {
        confirm("Do you want to use Workbox in your service worker?", false, "workbox choice")
    }

    fn input_app_dir(&self, default: &str) -> Result<String, AppError> {
        Input::new()
            .with_prompt("What is the location of your Remix app?")
            .default(default.to_string())
            .interact_text()
            .map_err(|err| prompt_error("app directory", err))
    }

    fn confirm_install(&self) -> Result<bool, AppError> {
        confirm("Do you want to install the dependencies now?", false, "install choice")
    }

    fn select_package_manager(&self) -> Result<PackageManager, AppError> {
        let items: Vec<&str> = PackageManager::ALL.iter().map(|pm| pm.command()).collect();
        let index = select_one("Which package manager do you use?", &items, "package manager")?;
        Ok(PackageManager::ALL[index])
    }
}
