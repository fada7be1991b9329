//! CLI argument definitions and `CheckProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_config_override, resolve_project_root, CheckProfile, OutputFormat};

/// Command-line arguments. With none given, the current directory is checked.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "route-check",
    author,
    version,
    about = "Check that a project's routes file declares the required API routes",
    long_about = None,
    after_help = "Required routes are read from route-check.toml in the project root (or --config / ROUTE_CHECK_CONFIG)."
)]
pub struct CheckArgs {
    /// Project root to check (defaults to the current directory).
    #[arg(long = "project-root", value_name = "DIR")]
    pub project_root: Option<PathBuf>,
    /// Path to route-check.toml (overrides ROUTE_CHECK_CONFIG).
    #[arg(long = "config", value_name = "FILE")]
    pub config_override: Option<PathBuf>,
    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Exit with status 2 when any required route is missing.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

impl CheckArgs {
    /// Build a `CheckProfile` from CLI args and the working directory.
    pub fn build(self) -> Result<CheckProfile> {
        let project_root = resolve_project_root(self.project_root)?;
        let config_path = resolve_config_override(self.config_override, &project_root);

        Ok(CheckProfile {
            project_root,
            config_path,
            format: self.format,
            strict: self.strict,
        })
    }
}
