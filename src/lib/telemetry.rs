//! Telemetry initialization and route check span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` on stderr so stdout carries only the report.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a single check run.
pub struct CheckSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl CheckSpan {
    /// Start a check span.
    pub fn start(required_routes: usize) -> Self {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            target: "route_check::checker",
            "route_check",
            %run_id,
            required_routes
        );
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    /// Close the span while recording status and route counts.
    pub fn finish(self, status: &'static str, found: usize, missing: usize) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "route_check::checker",
            run_id = %self.run_id,
            status = status,
            found = found,
            missing = missing,
            elapsed_ms = elapsed_ms,
            "Completed route check"
        );
    }
}

/// Payload for logging the resolved invocation as structured telemetry.
#[derive(Debug, Serialize)]
pub struct CheckProfileTelemetry<'a> {
    pub project_root: &'a str,
    pub config_path: Option<&'a str>,
    pub format: &'a str,
    pub strict: bool,
    pub required_routes: usize,
}

/// Emit the resolved profile to `tracing`.
pub fn emit_check_profile(telemetry: &CheckProfileTelemetry<'_>) {
    info!(
        target: "route_check::runtime",
        project_root = telemetry.project_root,
        config_path = telemetry.config_path.unwrap_or("<defaults>"),
        format = telemetry.format,
        strict = telemetry.strict,
        required_routes = telemetry.required_routes,
        "Starting route check"
    );
}
