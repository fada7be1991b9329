//! CheckProfile and project-root/config resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::lib::paths::resolve_against;

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Resolved invocation settings.
#[derive(Debug, Clone)]
pub struct CheckProfile {
    /// Absolute directory the marker and routes files are resolved against.
    pub project_root: PathBuf,
    /// Explicit config file; `None` defers to env var and project default.
    pub config_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub strict: bool,
}

impl CheckProfile {
    /// Profile for checking `project_root` with the default text report.
    pub fn for_root(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config_path: None,
            format: OutputFormat::Text,
            strict: false,
        }
    }
}

/// Resolve the project root: CLI override → current directory.
pub fn resolve_project_root(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(match override_path {
        Some(path) => resolve_against(&cwd, path),
        None => cwd,
    })
}

/// Make an explicit `--config` path absolute relative to the working directory.
///
/// Falls back to `project_root` if the working directory is unavailable.
pub fn resolve_config_override(
    override_path: Option<PathBuf>,
    project_root: &Path,
) -> Option<PathBuf> {
    let base = env::current_dir().unwrap_or_else(|_| project_root.to_path_buf());
    override_path.map(|path| resolve_against(&base, path))
}
