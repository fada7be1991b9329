//! Load and validate route checker configuration.
use std::{
    env,
    path::{Path, PathBuf},
};

use ::config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

use crate::{checker::RouteSpec, lib::errors::ConfigError};

pub mod check;
pub mod project;
pub mod routes;
pub mod telemetry;

pub use check::{parse_check_section, CheckSection, RawCheckSection};
pub use project::{
    parse_project_section, ProjectSection, RawProjectSection, DEFAULT_DECLARATION_KEYWORD,
    DEFAULT_MARKER_FILE, DEFAULT_ROUTES_FILE,
};
pub use routes::{parse_routes_section, RawRouteEntry, SUPPORTED_METHODS};

pub(crate) const CONFIG_ENV_KEY: &str = "ROUTE_CHECK_CONFIG";
pub(crate) const DEFAULT_CONFIG_FILE: &str = "route-check.toml";

/// Top-level configuration container.
#[derive(Debug, Clone, Default)]
pub struct CheckerConfig {
    pub project: ProjectSection,
    pub check: CheckSection,
    pub required_routes: Vec<RouteSpec>,
    /// `None` when built-in defaults were used.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawCheckerConfig {
    project: Option<RawProjectSection>,
    check: Option<RawCheckSection>,
    routes: Option<Vec<RawRouteEntry>>,
}

impl CheckerConfig {
    /// Resolve the config file and load it.
    ///
    /// Order: explicit path → `ROUTE_CHECK_CONFIG` → `<project_root>/route-check.toml`.
    /// Only the last one may be absent, in which case defaults apply.
    pub fn load_for_project(
        explicit: Option<PathBuf>,
        project_root: &Path,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            telemetry::log_source(&path, "cli");
            return Self::load_from_path(path);
        }

        match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => {
                let path = PathBuf::from(value);
                telemetry::log_source(&path, "env");
                Self::load_from_path(path)
            }
            _ => {
                let path = project_root.join(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    telemetry::log_source(&path, "project");
                    Self::load_from_path(path)
                } else {
                    telemetry::log_defaults(&path);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "route_check::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let source = File::from(path.clone()).format(FileFormat::Toml);
        let builder = Config::builder().add_source(source);
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "route_check::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawCheckerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "route_check::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "route_check::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawCheckerConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let project = parse_project_section(raw.project, &path)?;
        let check = parse_check_section(raw.check);
        let required_routes = parse_routes_section(raw.routes, &path)?;

        Ok(Self {
            project,
            check,
            required_routes,
            source_path: Some(path),
        })
    }
}
