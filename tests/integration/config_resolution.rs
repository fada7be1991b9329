use std::process::Command;

use tempfile::tempdir;

use crate::common::{describe, fixture, laravel_project, run_in, stdout, BINARY_PATH};

#[test]
fn env_config_is_used_when_no_flag_is_given() {
    let temp = tempdir().expect("create temp dir");
    laravel_project(temp.path(), Some("<?php\n"));

    let output = Command::new(BINARY_PATH)
        .current_dir(temp.path())
        .env("ROUTE_CHECK_CONFIG", fixture("config_routes_only.toml"))
        .output()
        .expect("route-check should run");

    assert_eq!(output.status.code(), Some(0), "{}", describe(&output));
    assert!(stdout(&output).contains("❌ Missing GET /health route"));
}

#[test]
fn invalid_config_exits_one_with_field_on_stderr() {
    let temp = tempdir().expect("create temp dir");
    laravel_project(temp.path(), Some("<?php\n"));
    let config = fixture("config_invalid_method.toml");

    let output = run_in(
        temp.path(),
        &["--config", config.to_string_lossy().as_ref()],
    );

    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("routes.method"), "{}", describe(&output));
    assert!(output.stdout.is_empty());
}

#[test]
fn explicit_missing_config_is_an_error() {
    let temp = tempdir().expect("create temp dir");
    laravel_project(temp.path(), Some("<?php\n"));

    let output = run_in(temp.path(), &["--config", "does-not-exist.toml"]);

    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
}

#[test]
fn unknown_flag_is_rejected_by_clap() {
    let temp = tempdir().expect("create temp dir");

    let output = run_in(temp.path(), &["--routes", "api.php"]);

    assert_eq!(output.status.code(), Some(2), "{}", describe(&output));
}
