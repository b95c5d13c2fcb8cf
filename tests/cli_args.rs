//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal UI starts are exercised here.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn shoplist_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shoplist"))
}

#[test]
fn test_help_lists_options() {
    let output = shoplist_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--add-policy"));
    assert!(stdout.contains("--print-on-exit"));
}

#[test]
fn test_invalid_policy_is_usage_error() {
    let output = shoplist_cmd()
        .args(["--add-policy", "maybe"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("maybe"));
}

#[test]
fn test_broken_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ui\n").unwrap();

    let output = shoplist_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to load configuration"));
    assert!(stderr.contains("Failed to parse config file"));
}
