use std::{io, path::PathBuf};

use ::config::ConfigError as ConfigLoaderError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Terminal failures of a route check run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Marker file `{marker}` not found in {root}")]
    NotProjectRoot { root: PathBuf, marker: PathBuf },
    #[error("Routes file {path} not found")]
    RoutesFileNotFound { path: PathBuf },
    #[error("Failed to read routes file {path}: {source}")]
    RoutesFileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to build declaration pattern for `{route}`: {source}")]
    Pattern {
        route: String,
        #[source]
        source: regex::Error,
    },
}

impl CheckError {
    /// User-facing descriptor printed in place of the raw error.
    pub fn descriptor(&self) -> &'static CheckErrorDescriptor {
        match self {
            CheckError::NotProjectRoot { .. } => &NOT_PROJECT_ROOT_ERROR,
            CheckError::RoutesFileNotFound { .. } => &ROUTES_FILE_NOT_FOUND_ERROR,
            CheckError::RoutesFileUnreadable { .. } => &ROUTES_FILE_UNREADABLE_ERROR,
            CheckError::Pattern { .. } => &ROUTE_PATTERN_ERROR,
        }
    }
}

/// Structured error metadata shown to the user when a check cannot run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckErrorDescriptor {
    /// Error code.
    pub code: &'static str,
    /// User-facing message.
    pub message: &'static str,
    /// Recommended remediation.
    pub remediation: &'static str,
}

impl CheckErrorDescriptor {
    /// Simple constructor.
    pub const fn new(code: &'static str, message: &'static str, remediation: &'static str) -> Self {
        Self {
            code,
            message,
            remediation,
        }
    }
}

/// Raised when the marker file is missing from the working directory.
pub const NOT_PROJECT_ROOT_ERROR: CheckErrorDescriptor = CheckErrorDescriptor::new(
    "NOT_PROJECT_ROOT",
    "route-check must be run from your project root directory",
    "Please navigate to your project folder and try again.",
);

/// Raised when the project root has no routes file.
pub const ROUTES_FILE_NOT_FOUND_ERROR: CheckErrorDescriptor = CheckErrorDescriptor::new(
    "ROUTES_FILE_NOT_FOUND",
    "routes file not found",
    "Make sure you're in the correct project directory.",
);

/// Raised when the routes file exists but cannot be read.
pub const ROUTES_FILE_UNREADABLE_ERROR: CheckErrorDescriptor = CheckErrorDescriptor::new(
    "ROUTES_FILE_UNREADABLE",
    "routes file could not be read",
    "Check the file permissions and try again.",
);

/// Raised when a configured route cannot be turned into a search pattern.
pub const ROUTE_PATTERN_ERROR: CheckErrorDescriptor = CheckErrorDescriptor::new(
    "ROUTE_PATTERN_INVALID",
    "a required route could not be converted into a search pattern",
    "Shorten or simplify the route path in route-check.toml.",
);
