use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_route-check");

/// Run the binary inside `cwd` with a clean config environment.
pub fn run_in(cwd: &Path, args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .args(args)
        .current_dir(cwd)
        .env_remove("ROUTE_CHECK_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("route-check should run")
}

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

/// Create a minimal Laravel-style project: `artisan` plus an optional routes file.
pub fn laravel_project(root: &Path, routes: Option<&str>) {
    fs::write(root.join("artisan"), "#!/usr/bin/env php\n").expect("can write marker");
    if let Some(routes) = routes {
        fs::create_dir_all(root.join("routes")).expect("can create routes dir");
        fs::write(root.join("routes/api.php"), routes).expect("can write routes file");
    }
}

pub fn write_config(root: &Path, body: &str) {
    fs::write(root.join("route-check.toml"), body).expect("can write config");
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout:\n{}\nstderr:\n{}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
