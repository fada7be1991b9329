//! Entry point for route-check.
use std::{io, process::ExitCode};

use clap::Parser;
use route_check::{
    checker::{run_check, CheckExit},
    cli::{CheckArgs, CheckProfile},
    config::CheckerConfig,
    lib::telemetry::{self, CheckProfileTelemetry},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<ExitCode, CheckExit> {
    telemetry::init_tracing().map_err(CheckExit::from_error)?;
    let args = CheckArgs::parse();
    let profile = args.build().map_err(CheckExit::from_error)?;
    let config_path = profile.config_path.clone();
    let config = CheckerConfig::load_for_project(config_path, &profile.project_root)
        .map_err(CheckExit::from_error)?;
    emit_profile(&profile, &config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = run_check(&profile, &config, &mut out).map_err(CheckExit::from_error)?;
    Ok(status.exit_code())
}

fn emit_profile(profile: &CheckProfile, config: &CheckerConfig) {
    let project_root = profile.project_root.display().to_string();
    let config_path = config
        .source_path
        .as_deref()
        .map(|path| path.display().to_string());
    telemetry::emit_check_profile(&CheckProfileTelemetry {
        project_root: &project_root,
        config_path: config_path.as_deref(),
        format: profile.format.as_str(),
        strict: profile.strict || config.check.strict,
        required_routes: config.required_routes.len(),
    });
}
