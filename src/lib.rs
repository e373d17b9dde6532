//! remix-pwa: add Progressive Web App scaffolding to an existing Remix project.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InstallOutcome, ScaffoldOptions, install, resolve_config_at, scaffold, scaffold_at,
};
pub use domain::{AppError, FileChange, ScaffoldConfig};
