//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("folioctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Content API server"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("folioctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("MongoDB connection string"));
}

#[test]
fn test_serve_fails_without_connection_string() {
    let mut cmd = Command::cargo_bin("folioctl").unwrap();
    cmd.arg("serve").env_remove("MONGODB_URI");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("MONGODB_URI"));
}
