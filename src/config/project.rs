use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths::is_nonempty_relative};

pub const DEFAULT_MARKER_FILE: &str = "artisan";
pub const DEFAULT_ROUTES_FILE: &str = "routes/api.php";
pub const DEFAULT_DECLARATION_KEYWORD: &str = "Route";

/// Where the project lives and how its routes are declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSection {
    pub marker_file: PathBuf,
    pub routes_file: PathBuf,
    pub declaration_keyword: String,
    pub app_name: Option<String>,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            marker_file: PathBuf::from(DEFAULT_MARKER_FILE),
            routes_file: PathBuf::from(DEFAULT_ROUTES_FILE),
            declaration_keyword: DEFAULT_DECLARATION_KEYWORD.to_string(),
            app_name: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawProjectSection {
    pub marker_file: Option<PathBuf>,
    pub routes_file: Option<PathBuf>,
    pub declaration_keyword: Option<String>,
    pub app_name: Option<String>,
}

pub fn parse_project_section(
    raw: Option<RawProjectSection>,
    path: &Path,
) -> Result<ProjectSection, ConfigError> {
    let project_raw = raw.unwrap_or_default();

    let marker_file = project_raw
        .marker_file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MARKER_FILE));
    validate_relative(path, "project.marker_file", &marker_file)?;

    let routes_file = project_raw
        .routes_file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROUTES_FILE));
    validate_relative(path, "project.routes_file", &routes_file)?;

    let declaration_keyword = project_raw
        .declaration_keyword
        .unwrap_or_else(|| DEFAULT_DECLARATION_KEYWORD.to_string());
    validate_keyword(path, &declaration_keyword)?;

    let app_name = project_raw
        .app_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    Ok(ProjectSection {
        marker_file,
        routes_file,
        declaration_keyword,
        app_name,
    })
}

fn validate_relative(path: &Path, field: &'static str, value: &Path) -> Result<(), ConfigError> {
    if is_nonempty_relative(value) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: format!(
            "Provide a path relative to the project root: {}",
            value.display()
        ),
    })
}

/// Accepts PHP class names, optionally namespaced (`Illuminate\Support\Facades\Route`).
fn validate_keyword(path: &Path, keyword: &str) -> Result<(), ConfigError> {
    let valid = !keyword.is_empty()
        && keyword.trim_start_matches('\\').split('\\').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
                && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        });
    if valid {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "project.declaration_keyword",
        message: format!("Not a valid class name: {keyword}"),
    })
}
