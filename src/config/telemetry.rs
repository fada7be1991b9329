use std::path::Path;

use tracing::{debug, info};

use super::{CheckerConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_FILE};

pub fn log_source(path: &Path, origin: &'static str) {
    info!(
        target: "route_check::config",
        path = %path.display(),
        origin,
        "Resolved configuration file"
    );
}

pub fn log_defaults(candidate: &Path) {
    debug!(
        target: "route_check::config",
        candidate = %candidate.display(),
        env = CONFIG_ENV_KEY,
        default = DEFAULT_CONFIG_FILE,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &CheckerConfig) {
    info!(
        target: "route_check::config",
        path = %config
            .source_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        marker_file = %config.project.marker_file.display(),
        routes_file = %config.project.routes_file.display(),
        declaration_keyword = %config.project.declaration_keyword,
        required_routes = config.required_routes.len(),
        strict = config.check.strict,
        "Configuration file loaded successfully"
    );
}
