use std::path::PathBuf;
use std::process::Command;

fn xtask_bin() -> &'static str {
    env!("CARGO_BIN_EXE_xtask")
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask crate should have repository parent")
        .to_path_buf()
}

#[test]
fn xtask_help_lists_preflight() {
    let output = Command::new(xtask_bin())
        .arg("--help")
        .output()
        .expect("xtask should run");
    assert!(output.status.success(), "xtask --help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("preflight"),
        "xtask --help should list preflight, got:\n{stdout}"
    );
}

#[test]
fn xtask_preflight_help_mentions_skip_release() {
    let output = Command::new(xtask_bin())
        .args(["preflight", "--help"])
        .output()
        .expect("xtask should run");
    assert!(
        output.status.success(),
        "xtask preflight --help should succeed"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("--skip-release"),
        "help should mention --skip-release, got:\n{stdout}"
    );
}

#[test]
fn workspace_manifest_lists_xtask_member() {
    let manifest = std::fs::read_to_string(repo_root().join("Cargo.toml"))
        .expect("workspace manifest should be readable");
    assert!(manifest.contains("[workspace]"));
    assert!(manifest.contains("\"xtask\""));
}
