//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use colored::Colorize;

use crate::app::api::{self, DOCS_URL, InstallOutcome, ScaffoldOptions};
use crate::domain::{
    AppError, CacheStrategy, ChangeAction, FeatureSet, FileChange, Language, PackageManager,
};

#[derive(Parser, Debug)]
#[command(name = "remix-pwa")]
#[command(version, disable_version_flag = true)]
#[command(
    about = "Add service workers, a web manifest and push notifications to a Remix app",
    long_about = None
)]
struct Cli {
    /// Use TypeScript templates
    #[arg(long = "typescript", visible_alias = "ts", overrides_with = "no_typescript")]
    typescript: bool,
    /// Use JavaScript templates
    #[arg(long = "no-typescript", visible_aliases = ["no-ts", "js"], overrides_with = "typescript")]
    no_typescript: bool,
    /// Generate a Workbox-based service worker
    #[arg(long, overrides_with = "no_workbox")]
    workbox: bool,
    /// Generate a plain service worker
    #[arg(long, overrides_with = "workbox")]
    no_workbox: bool,
    /// Install dependencies afterwards
    #[arg(long, overrides_with = "no_install")]
    install: bool,
    /// Skip dependency installation
    #[arg(long, overrides_with = "install")]
    no_install: bool,
    /// Package manager (npm, yarn, pnpm)
    #[arg(long = "package-manager", visible_alias = "pm", value_name = "PM")]
    package_manager: Option<String>,
    /// Caching strategy (pre, jit)
    #[arg(long, value_name = "STRATEGY")]
    cache: Option<String>,
    /// Comma-separated features (sw, manifest, push, utils, icons)
    #[arg(long, visible_alias = "feat", value_name = "LIST")]
    features: Option<String>,
    /// App directory relative to the project root
    #[arg(long, value_name = "PATH")]
    dir: Option<String>,
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    cwd: Option<PathBuf>,
    /// Accept defaults for every unanswered question
    #[arg(short = 'y', long)]
    yes: bool,
    /// Print the documentation URL and exit
    #[arg(long)]
    docs: bool,
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    fn scaffold_options(&self) -> Result<ScaffoldOptions, AppError> {
        Ok(ScaffoldOptions {
            language: flag_pair(self.typescript, self.no_typescript)
                .map(|ts| if ts { Language::TypeScript } else { Language::JavaScript }),
            features: self.features.as_deref().map(FeatureSet::parse_list).transpose()?,
            cache: self.cache.as_deref().map(CacheStrategy::parse).transpose()?,
            workbox: flag_pair(self.workbox, self.no_workbox),
            dir: self.dir.clone(),
            install: flag_pair(self.install, self.no_install),
            package_manager: self
                .package_manager
                .as_deref()
                .map(PackageManager::parse)
                .transpose()?,
            yes: self.yes,
        })
    }
}

/// `--x` / `--no-x` pairs: `None` when neither was given.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = run_scaffold(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_scaffold(cli: Cli) -> Result<(), AppError> {
    if cli.docs {
        println!("{}", DOCS_URL);
        return Ok(());
    }

    let options = cli.scaffold_options()?;
    let root = match cli.cwd {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    println!("{}", "Welcome to Remix PWA!".magenta().bold());
    println!();

    let config = api::resolve_config_at(root, options)?;
    let changes = api::scaffold(&config)?;
    for change in &changes {
        print_change(change);
    }

    println!();
    println!(
        "{}",
        "PWA service workers successfully integrated into Remix! Check out the docs for additional info."
            .green()
    );

    if config.install
        && let Some(pm) = config.package_manager
    {
        println!("{}", format!("Running {}....", pm.install_command_line()).blue());
    }
    match api::install(&config)? {
        InstallOutcome::Installed(pm) => {
            println!("{}", format!("Successfully ran {}!", pm.install_command_line()).green());
        }
        outcome @ InstallOutcome::Deferred(_) => {
            if let Some(command) = outcome.reminder() {
                println!("{}", format!("Don't forget to run {}!", command).red());
            }
        }
    }
    Ok(())
}

fn print_change(change: &FileChange) {
    let label = change.action.label();
    let label = match change.action {
        ChangeAction::Created => label.green(),
        ChangeAction::Overwritten => label.cyan(),
        ChangeAction::Skipped => label.yellow(),
        ChangeAction::Spliced | ChangeAction::Appended | ChangeAction::Updated => label.green(),
    };
    println!("   {} {}", label, change.path);
}
