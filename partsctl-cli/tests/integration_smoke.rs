//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// === Top Level ===

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();

    cmd.assert().failure();
}

// === Serve Command Tests ===

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--cors-permissive"))
        .stdout(predicate::str::contains("--max-connections"))
        .stdout(predicate::str::contains("reference fixture"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}

#[test]
fn test_serve_demo_conflicts_with_database_url() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.env_remove("DATABASE_URL")
        .arg("serve")
        .arg("--demo")
        .arg("--database-url")
        .arg("postgres://localhost/x");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// === Init-db Command Tests ===

#[test]
fn test_init_db_help() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("init-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_init_db_seeds_sqlite_file() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("catalog.db");
    let url = format!("sqlite://{}?mode=rwc", db.display());

    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("init-db").arg("--database-url").arg(&url).arg("--seed");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fixture loaded"));
    assert!(db.exists());

    // Idempotent
    let mut again = Command::cargo_bin("partsctl").unwrap();
    again.arg("init-db").arg("--database-url").arg(&url).arg("--seed");
    again.assert().success();
}

// === Completions Command Tests ===

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("partsctl"));
}

#[test]
fn test_completions_rejects_unknown_shell() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("completions").arg("tcsh");

    cmd.assert().failure();
}
