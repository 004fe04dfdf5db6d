//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("photosort-setup"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Environment bootstrapper"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("photosort-setup"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_flag() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("photosort-setup"));
    cmd.arg("--frobnicate");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_rejects_quiet_with_verbose() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("photosort-setup"));
    cmd.args(["--quiet", "--verbose"]);
    cmd.assert().failure();
    Ok(())
}

#[test]
fn missing_runtime_is_fatal_before_any_install() -> Result<(), Box<dyn std::error::Error>> {
    let empty = TempDir::new()?;
    let project = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("photosort-setup"));
    cmd.env("PATH", empty.path());
    cmd.args(["--project", project.path().to_str().unwrap()]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("python.org"))
        .stdout(predicate::str::contains("Installing").not());

    // Nothing was mutated: no environment was created.
    assert!(!project.path().join(".venv").exists());
    Ok(())
}
