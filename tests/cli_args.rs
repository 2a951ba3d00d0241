//! Tests for CLI argument parsing and startup errors, run against the
//! built binary.

mod common;

use common::*;
use std::process::Command;

fn moviefinder_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_moviefinder"));
    cmd.env_remove("MOVIEFINDER_LOG");
    cmd
}

#[test]
fn help_lists_options() {
    let output = moviefinder_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--language"));
    assert!(stdout.contains("--include-adult"));
    assert!(stdout.contains("--base-url"));
}

#[test]
fn version_flag_prints_version() {
    let output = moviefinder_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_token_exits_with_error() {
    let (_dir, path) = temp_config("[api]\ntoken_env = \"MOVIEFINDER_TEST_ABSENT_TOKEN\"\n");
    let output = moviefinder_cmd()
        .arg("--config")
        .arg(&path)
        .env_remove("MOVIEFINDER_TEST_ABSENT_TOKEN")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MOVIEFINDER_TEST_ABSENT_TOKEN"), "stderr: {stderr}");
}

#[test]
fn invalid_base_url_override_exits_with_error() {
    let (_dir, path) = temp_config("");
    let output = moviefinder_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--base-url")
        .arg("not-a-url")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not-a-url"), "stderr: {stderr}");
}

#[test]
fn unreadable_config_exits_with_error() {
    let (dir, _) = temp_config("");
    let output = moviefinder_cmd()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.toml"));
}
