//! Rendering of check results as a text checklist or a JSON document.

use std::{io::Write, path::Path};

use anyhow::Result;
use serde_json::json;

use crate::{cli::OutputFormat, lib::errors::CheckError};

use super::RouteScan;

const BANNER: &str = "=== API Route Checker ===";
const FOOTER: &str = "=== Route Check Complete ===";

/// Everything a report needs about a scan that ran to completion.
#[derive(Debug, Clone)]
pub struct CompletedCheck<'a> {
    pub routes_file: &'a Path,
    pub routes_file_sha256: &'a str,
    pub checked_at: String,
    pub scan: &'a RouteScan,
    pub app_name: Option<&'a str>,
}

/// Outcome of a run as seen by the renderer.
#[derive(Debug)]
pub enum CheckReport<'a> {
    Failed {
        error: &'a CheckError,
        routes_file: &'a Path,
    },
    Completed(CompletedCheck<'a>),
}

pub fn render(report: &CheckReport<'_>, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(report, out),
        OutputFormat::Json => render_json(report, out),
    }
}

/// Write the human-readable checklist.
pub fn render_text(report: &CheckReport<'_>, out: &mut impl Write) -> Result<()> {
    match report {
        CheckReport::Failed { error, routes_file } => {
            // The project-root check runs before anything else is printed.
            if !matches!(error, CheckError::NotProjectRoot { .. }) {
                writeln!(out, "{BANNER}\n")?;
            }
            writeln!(out, "❌ Error: {}", headline(error, routes_file))?;
            writeln!(out, "   {}", error.descriptor().remediation)?;
        }
        CheckReport::Completed(check) => {
            writeln!(out, "{BANNER}\n")?;
            writeln!(out, "✅ Found {} file", check.routes_file.display())?;
            for outcome in &check.scan.outcomes {
                if outcome.found {
                    writeln!(out, "✅ Found {} route", outcome.route)?;
                } else {
                    writeln!(out, "❌ Missing {} route", outcome.route)?;
                }
            }

            if check.scan.is_complete() {
                writeln!(out, "\n🎉 All required API routes are defined!")?;
                if let Some(app_name) = check.app_name {
                    writeln!(out, "Your backend should work with the {app_name} app.")?;
                }
            } else {
                writeln!(out, "\n⚠️  Missing routes detected:")?;
                for route in check.scan.missing() {
                    writeln!(out, "   - {route}")?;
                }
            }

            writeln!(out, "\n{FOOTER}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write a single pretty-printed JSON document.
pub fn render_json(report: &CheckReport<'_>, out: &mut impl Write) -> Result<()> {
    let payload = match report {
        CheckReport::Failed { error, routes_file } => {
            let descriptor = error.descriptor();
            json!({
                "status": "error",
                "code": descriptor.code,
                "message": descriptor.message,
                "remediation": descriptor.remediation,
                "routes_file": routes_file.to_string_lossy(),
                "detail": error.to_string(),
            })
        }
        CheckReport::Completed(check) => {
            let status = if check.scan.is_complete() {
                "complete"
            } else {
                "missing_routes"
            };
            json!({
                "status": status,
                "routes_file": check.routes_file.to_string_lossy(),
                "routes_file_sha256": check.routes_file_sha256,
                "checked_at": check.checked_at,
                "app_name": check.app_name,
                "found": check.scan.found().map(ToString::to_string).collect::<Vec<_>>(),
                "missing": check.scan.missing().map(ToString::to_string).collect::<Vec<_>>(),
            })
        }
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
    out.flush()?;
    Ok(())
}

fn headline(error: &CheckError, routes_file: &Path) -> String {
    match error {
        CheckError::NotProjectRoot { marker, .. } => format!(
            "{} (no `{}` found)",
            error.descriptor().message,
            marker.display()
        ),
        CheckError::RoutesFileNotFound { .. } => {
            format!("{} file not found", routes_file.display())
        }
        CheckError::RoutesFileUnreadable { source, .. } => {
            format!("{} file could not be read: {source}", routes_file.display())
        }
        CheckError::Pattern { .. } => error.to_string(),
    }
}
