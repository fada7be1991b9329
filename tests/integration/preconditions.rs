use tempfile::tempdir;

use crate::common::{describe, laravel_project, run_in, stdout};

#[test]
fn outside_project_root_exits_one() {
    let temp = tempdir().expect("create temp dir");

    let output = run_in(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    let stdout = stdout(&output);
    assert!(
        stdout.contains("must be run from your project root directory"),
        "{}",
        describe(&output)
    );
    assert!(!stdout.contains("=== API Route Checker ==="));
}

#[test]
fn missing_routes_file_exits_one() {
    let temp = tempdir().expect("create temp dir");
    laravel_project(temp.path(), None);

    let output = run_in(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    let stdout = stdout(&output);
    assert!(stdout.starts_with("=== API Route Checker ==="));
    assert!(
        stdout.contains("❌ Error: routes/api.php file not found"),
        "{}",
        describe(&output)
    );
}

#[test]
fn missing_routes_file_in_json_reports_code() {
    let temp = tempdir().expect("create temp dir");
    laravel_project(temp.path(), None);

    let output = run_in(temp.path(), &["--format", "json"]);

    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["code"], "ROUTES_FILE_NOT_FOUND");
}

#[test]
fn project_root_flag_overrides_working_directory() {
    let project = tempdir().expect("create temp dir");
    let elsewhere = tempdir().expect("create temp dir");
    laravel_project(project.path(), Some("<?php\n"));

    let root = project.path().to_string_lossy().into_owned();
    let output = run_in(elsewhere.path(), &["--project-root", &root]);

    assert!(output.status.success(), "{}", describe(&output));
    assert!(stdout(&output).contains("🎉 All required API routes are defined!"));
}
