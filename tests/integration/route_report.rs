use tempfile::tempdir;

use crate::common::{describe, fixture, laravel_project, run_in, stdout, write_config};

const USERS_ONLY: &str = "<?php\nRoute::get('/users', [UserController::class, 'index']);\n";

#[test]
fn empty_route_list_reports_success() {
    let temp = tempdir().expect("create temp dir");
    laravel_project(temp.path(), Some("anything at all"));

    let output = run_in(temp.path(), &[]);

    assert!(output.status.success(), "{}", describe(&output));
    assert_eq!(
        stdout(&output),
        "=== API Route Checker ===\n\n\
         ✅ Found routes/api.php file\n\n\
         🎉 All required API routes are defined!\n\n\
         === Route Check Complete ===\n"
    );
}

#[test]
fn found_and_missing_routes_keep_declared_order() {
    let temp = tempdir().expect("create temp dir");
    laravel_project(temp.path(), Some(USERS_ONLY));
    write_config(
        temp.path(),
        "[[routes]]\nmethod = \"POST\"\npath = \"/orders\"\n\n\
         [[routes]]\nmethod = \"GET\"\npath = \"/users\"\n",
    );

    let output = run_in(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(0), "{}", describe(&output));
    assert_eq!(
        stdout(&output),
        "=== API Route Checker ===\n\n\
         ✅ Found routes/api.php file\n\
         ❌ Missing POST /orders route\n\
         ✅ Found GET /users route\n\n\
         ⚠️  Missing routes detected:\n   - POST /orders\n\n\
         === Route Check Complete ===\n"
    );
}

#[test]
fn strict_mode_exits_two_on_missing_routes() {
    let temp = tempdir().expect("create temp dir");
    laravel_project(temp.path(), Some(USERS_ONLY));
    let config = fixture("config_strict_orders.toml");
    let config = config.to_string_lossy();

    let output = run_in(temp.path(), &["--config", &config]);

    assert_eq!(output.status.code(), Some(2), "{}", describe(&output));
    assert!(stdout(&output).contains("   - POST /orders"));
}

#[test]
fn fixture_project_declares_every_configured_route() {
    let project = fixture("laravel_app");
    let config = fixture("config_valid.toml");
    let config = config.to_string_lossy();

    let output = run_in(&project, &["--config", &config, "--format", "json"]);

    assert!(output.status.success(), "{}", describe(&output));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["status"], "complete");
    assert_eq!(value["app_name"], "kasir_bintang");
    assert_eq!(
        value["found"],
        serde_json::json!(["GET /users", "POST /users", "DELETE /users/{id}"])
    );
    assert_eq!(value["missing"], serde_json::json!([]));
}
