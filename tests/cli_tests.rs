//! CLI interface tests

#![expect(clippy::unwrap_used, reason = "This is a test module")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command pointed at a port nothing listens on, run from an empty directory
fn studentdb(work_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studentdb").unwrap();
    cmd.current_dir(work_dir.path())
        .env("PGHOST", "127.0.0.1")
        .env("PGPORT", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("studentdb").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("studentdb"));
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("studentdb").unwrap();
    cmd.arg("--help").assert().success().stdout(
        predicate::str::contains("get_all")
            .and(predicate::str::contains("add"))
            .and(predicate::str::contains("update_email"))
            .and(predicate::str::contains("delete")),
    );
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    studentdb(&temp_dir).assert().failure().code(2);
}

#[test]
fn test_add_missing_required_flag() {
    let temp_dir = TempDir::new().unwrap();
    studentdb(&temp_dir)
        .args(["add", "--first", "Ana", "--email", "ana@example.com"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--last"));
}

#[test]
fn test_non_integer_id_rejected_before_connecting() {
    let temp_dir = TempDir::new().unwrap();
    studentdb(&temp_dir)
        .args(["delete", "--id", "three"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Connection error").not());
}

#[test]
fn test_invalid_date_rejected() {
    let temp_dir = TempDir::new().unwrap();
    studentdb(&temp_dir)
        .args([
            "add", "--first", "Ana", "--last", "Lopez", "--email", "a@b.c", "--date", "2024-13-01",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn test_unreachable_database_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    studentdb(&temp_dir)
        .arg("get_all")
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Connection error"));
}

#[test]
fn test_invalid_port_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    studentdb(&temp_dir)
        .env("PGPORT", "not-a-port")
        .arg("get_all")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid PGPORT"));
}

#[test]
fn test_dotenv_fills_gaps_but_process_environment_wins() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        "PGPORT=55432\nPGDATABASE=from_dotenv\n",
    )
    .unwrap();

    studentdb(&temp_dir)
        .env_remove("PGDATABASE")
        .arg("get_all")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("@127.0.0.1:1/from_dotenv"));
}
