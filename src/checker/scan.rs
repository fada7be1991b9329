//! Precondition checks and the per-route scan.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::lib::{errors::CheckError, fs::is_regular_file};

use super::{RouteMatcher, RouteSpec};

/// Found/missing outcome for one required route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOutcome {
    pub route: RouteSpec,
    pub found: bool,
}

/// Outcomes in the order the routes were required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteScan {
    pub outcomes: Vec<RouteOutcome>,
}

impl RouteScan {
    pub fn found(&self) -> impl Iterator<Item = &RouteSpec> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.found)
            .map(|outcome| &outcome.route)
    }

    pub fn missing(&self) -> impl Iterator<Item = &RouteSpec> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.found)
            .map(|outcome| &outcome.route)
    }

    pub fn missing_count(&self) -> usize {
        self.missing().count()
    }

    /// True when nothing is missing, including when nothing was required.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.found)
    }
}

/// Fails with `NotProjectRoot` unless `marker` exists under `root`.
pub fn ensure_project_root(root: &Path, marker: &Path) -> Result<(), CheckError> {
    if root.join(marker).exists() {
        return Ok(());
    }

    warn!(
        target: "route_check::checker",
        root = %root.display(),
        marker = %marker.display(),
        "Marker file not found"
    );
    Err(CheckError::NotProjectRoot {
        root: root.to_path_buf(),
        marker: marker.to_path_buf(),
    })
}

/// Resolve the routes file under `root`, failing with `RoutesFileNotFound`.
pub fn locate_routes_file(root: &Path, routes_file: &Path) -> Result<PathBuf, CheckError> {
    let path = root.join(routes_file);
    match is_regular_file(&path) {
        Ok(true) => Ok(path),
        Ok(false) => {
            warn!(
                target: "route_check::checker",
                path = %path.display(),
                "Routes file not found"
            );
            Err(CheckError::RoutesFileNotFound { path })
        }
        Err(source) => Err(CheckError::RoutesFileUnreadable { path, source }),
    }
}

/// Test each required route against `contents`, keeping the required order.
pub fn scan_routes(
    contents: &str,
    matcher: &RouteMatcher,
    routes: &[RouteSpec],
) -> Result<RouteScan, CheckError> {
    let mut outcomes = Vec::with_capacity(routes.len());
    for route in routes {
        let found = matcher.is_declared(contents, route)?;
        debug!(
            target: "route_check::checker",
            route = %route,
            found,
            "Scanned route"
        );
        outcomes.push(RouteOutcome {
            route: route.clone(),
            found,
        });
    }
    Ok(RouteScan { outcomes })
}
