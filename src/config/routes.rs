use std::{collections::HashSet, path::Path};

use serde::Deserialize;

use crate::{checker::RouteSpec, lib::errors::ConfigError};

/// Route facade methods that take a URI as their first argument.
pub const SUPPORTED_METHODS: &[&str] = &[
    "get", "post", "put", "patch", "delete", "options", "any",
];

#[derive(Debug, Deserialize)]
pub struct RawRouteEntry {
    pub method: Option<String>,
    pub path: Option<String>,
}

/// Parse `[[routes]]` entries, preserving their declared order.
pub fn parse_routes_section(
    raw: Option<Vec<RawRouteEntry>>,
    path: &Path,
) -> Result<Vec<RouteSpec>, ConfigError> {
    let entries = raw.unwrap_or_default();
    let mut seen = HashSet::new();
    let mut routes = Vec::with_capacity(entries.len());

    for entry in entries {
        let method = entry
            .method
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                path: path.to_path_buf(),
                field: "routes.method",
            })?;
        validate_method(path, &method)?;

        let route_path = entry
            .path
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                path: path.to_path_buf(),
                field: "routes.path",
            })?;

        let route = RouteSpec::new(method.trim(), route_path.trim());
        if !seen.insert(route.clone()) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "routes",
                message: format!("Route listed more than once: {route}"),
            });
        }
        routes.push(route);
    }

    Ok(routes)
}

fn validate_method(path: &Path, method: &str) -> Result<(), ConfigError> {
    let normalized = method.trim().to_ascii_lowercase();
    if SUPPORTED_METHODS.contains(&normalized.as_str()) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "routes.method",
        message: format!(
            "Unsupported method `{method}`; use one of {}",
            SUPPORTED_METHODS.join(", ")
        ),
    })
}
