//! Route checker: project-root validation, routes file scan, and reporting.
use std::io::Write;

use anyhow::Result;
use chrono::Utc;

use crate::{
    cli::CheckProfile,
    config::CheckerConfig,
    lib::{
        errors::CheckError,
        fs::{read_routes_file, LoadedRoutesFile},
        telemetry::CheckSpan,
    },
};

pub mod exit;
pub mod matcher;
pub mod report;
pub mod route_spec;
pub mod scan;

pub use exit::{CheckExit, CheckStatus, STRICT_FAILURE_CODE};
pub use matcher::{route_declared, RouteMatcher};
pub use report::{render, render_json, render_text, CheckReport, CompletedCheck};
pub use route_spec::RouteSpec;
pub use scan::{ensure_project_root, locate_routes_file, scan_routes, RouteOutcome, RouteScan};

/// Run one check against `profile.project_root` and write the report to `out`.
///
/// Precondition failures are reported through `out` and surface as
/// [`CheckStatus::PreconditionFailed`]; only write failures are returned as errors.
pub fn run_check(
    profile: &CheckProfile,
    config: &CheckerConfig,
    out: &mut impl Write,
) -> Result<CheckStatus> {
    let span = CheckSpan::start(config.required_routes.len());
    let project = &config.project;

    let (loaded, scan) = match scan_project(profile, config) {
        Ok(result) => result,
        Err(error) => {
            let report = CheckReport::Failed {
                error: &error,
                routes_file: &project.routes_file,
            };
            render(&report, profile.format, out)?;
            let status = CheckStatus::PreconditionFailed;
            span.finish(status.as_str(), 0, 0);
            return Ok(status);
        }
    };

    let report = CheckReport::Completed(CompletedCheck {
        routes_file: &project.routes_file,
        routes_file_sha256: &loaded.sha256,
        checked_at: Utc::now().to_rfc3339(),
        scan: &scan,
        app_name: project.app_name.as_deref(),
    });
    render(&report, profile.format, out)?;

    let missing = scan.missing_count();
    let status = if missing == 0 {
        CheckStatus::Complete
    } else {
        CheckStatus::MissingRoutes {
            missing,
            strict: profile.strict || config.check.strict,
        }
    };
    span.finish(status.as_str(), scan.outcomes.len() - missing, missing);
    Ok(status)
}

fn scan_project(
    profile: &CheckProfile,
    config: &CheckerConfig,
) -> Result<(LoadedRoutesFile, RouteScan), CheckError> {
    let project = &config.project;
    ensure_project_root(&profile.project_root, &project.marker_file)?;
    let routes_path = locate_routes_file(&profile.project_root, &project.routes_file)?;
    let loaded = read_routes_file(&routes_path)?;
    let matcher = RouteMatcher::new(project.declaration_keyword.as_str());
    let scan = scan_routes(&loaded.contents, &matcher, &config.required_routes)?;
    Ok((loaded, scan))
}
