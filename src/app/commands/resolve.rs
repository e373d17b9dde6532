//! Option resolution: command-line flags, `remix-pwa.toml`, prompts and project detection.

use std::path::PathBuf;

use crate::domain::package_manifest;
use crate::domain::route_convention::REMIX_CONFIG_FILES;
use crate::domain::{
    AppError, CacheStrategy, Feature, FeatureSet, Language, PROJECT_SETTINGS_FILE,
    PackageManager, ProjectSettings, RouteConvention, ScaffoldConfig, normalize_app_dir,
};
use crate::ports::{ProjectFilesystem, Prompter};

use super::manifest::PACKAGE_JSON;

/// Default app directory relative to the project root.
pub const DEFAULT_APP_DIR: &str = "app";

/// Answers given up front. `None` means "not given"; such questions are prompted
/// for, or defaulted when `yes` is set.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    pub language: Option<Language>,
    pub features: Option<FeatureSet>,
    pub cache: Option<CacheStrategy>,
    pub workbox: Option<bool>,
    pub dir: Option<String>,
    pub install: Option<bool>,
    pub package_manager: Option<PackageManager>,
    /// Accept defaults for every unanswered question.
    pub yes: bool,
}

impl ScaffoldOptions {
    /// Fill options that were not given from project settings.
    fn with_settings(self, settings: ProjectSettings) -> Self {
        Self {
            language: self.language.or(settings.language),
            features: self.features.or(settings.features),
            cache: self.cache.or(settings.cache),
            workbox: self.workbox.or(settings.workbox),
            dir: self.dir.or(settings.dir),
            install: self.install.or(settings.install),
            package_manager: self.package_manager.or(settings.package_manager),
            yes: self.yes,
        }
    }
}

/// Load `remix-pwa.toml` from the project root, if present.
pub fn load_project_settings(
    project: &impl ProjectFilesystem,
) -> Result<Option<ProjectSettings>, AppError> {
    if !project.file_exists(PROJECT_SETTINGS_FILE) {
        return Ok(None);
    }
    let content = project.read_file(PROJECT_SETTINGS_FILE)?;
    ProjectSettings::parse_toml(&content).map(Some)
}

/// First package manager whose lockfile is present.
pub fn detect_package_manager(project: &impl ProjectFilesystem) -> Option<PackageManager> {
    PackageManager::ALL.into_iter().find(|pm| project.file_exists(pm.lockfile()))
}

/// Route file convention: the Remix config flag wins, then the `@remix-run/dev` major version.
pub fn detect_route_convention(
    project: &impl ProjectFilesystem,
) -> Result<RouteConvention, AppError> {
    for file in REMIX_CONFIG_FILES {
        if !project.file_exists(file) {
            continue;
        }
        let content = project.read_file(file)?;
        if let Some(convention) = RouteConvention::from_remix_config(&content) {
            log::debug!("{} sets v2_routeConvention; using {} routes", file, convention.label());
            return Ok(convention);
        }
    }

    if project.file_exists(PACKAGE_JSON) {
        match package_manifest::parse(&project.read_file(PACKAGE_JSON)?) {
            Ok(manifest) => {
                if let Some(major) = package_manifest::dependency_major(&manifest, "@remix-run/dev")
                {
                    let convention = RouteConvention::from_remix_major(major);
                    log::debug!("@remix-run/dev v{}; using {} routes", major, convention.label());
                    return Ok(convention);
                }
            }
            Err(details) => log::debug!("package.json not usable for detection: {}", details),
        }
    }

    Ok(RouteConvention::Nested)
}

/// Resolve every option into an immutable `ScaffoldConfig`.
///
/// Priority: `options` > `remix-pwa.toml` > prompts > defaults. A question
/// already answered by a higher source is never asked.
pub fn resolve<F, P>(
    project: &F,
    project_root: PathBuf,
    options: ScaffoldOptions,
    prompter: &P,
) -> Result<ScaffoldConfig, AppError>
where
    F: ProjectFilesystem,
    P: Prompter,
{
    let options = match load_project_settings(project)? {
        Some(settings) => options.with_settings(settings),
        None => options,
    };
    let yes = options.yes;

    let language =
        answer(options.language, yes, Language::TypeScript, || prompter.select_language())?;
    let features = answer(options.features, yes, FeatureSet::all(), || prompter.select_features())?;

    let (cache, workbox) = if features.contains(Feature::ServiceWorkers) {
        (
            answer(options.cache, yes, CacheStrategy::Precache, || prompter.select_cache())?,
            answer(options.workbox, yes, false, || prompter.confirm_workbox())?,
        )
    } else {
        (options.cache.unwrap_or(CacheStrategy::Precache), options.workbox.unwrap_or(false))
    };

    let dir = answer(options.dir, yes, DEFAULT_APP_DIR.to_string(), || {
        prompter.input_app_dir(DEFAULT_APP_DIR)
    })?;
    let install = answer(options.install, yes, false, || prompter.confirm_install())?;

    let package_manager = match options.package_manager {
        Some(pm) => Some(pm),
        None => match detect_package_manager(project) {
            Some(pm) => {
                log::debug!("detected {} from {}", pm, pm.lockfile());
                Some(pm)
            }
            None if install => {
                Some(answer(None, yes, PackageManager::Npm, || prompter.select_package_manager())?)
            }
            None => None,
        },
    };

    if features.is_empty() {
        log::warn!("no features selected; nothing will be generated");
    }

    Ok(ScaffoldConfig {
        project_root,
        language,
        cache,
        workbox,
        features,
        app_dir: normalize_app_dir(&dir),
        install,
        package_manager,
        route_convention: detect_route_convention(project)?,
    })
}

fn answer<T>(
    given: Option<T>,
    yes: bool,
    default: T,
    ask: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError> {
    match given {
        Some(value) => Ok(value),
        None if yes => Ok(default),
        None => ask(),
    }
}
