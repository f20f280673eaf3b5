//! Integration tests for the fitlog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Registration and login workflow
//! - Exercise logging and listing
//! - Calorie/macro calculation output
//! - Data persistence in the store file

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary, isolated from any user-level config
fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fitlog"));
    cmd.env("XDG_CONFIG_HOME", temp_dir.path().join("config"));
    cmd.arg("--data-dir").arg(temp_dir.path());
    cmd
}

fn register(temp_dir: &TempDir, username: &str, password: &str) {
    cli(temp_dir)
        .args(["register", username, "--password", password])
        .args(["--confirm-password", password])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created"));
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Exercise tracker and calorie calculator",
        ));
}

#[test]
fn test_register_creates_store_with_hashed_password() {
    let temp_dir = setup_test_dir();
    register(&temp_dir, "alice", "hunter2");

    let store_path = temp_dir.path().join("user_data.json");
    let contents = fs::read_to_string(&store_path).expect("Failed to read store");
    let store: serde_json::Value = serde_json::from_str(&contents).unwrap();

    let hash = store["alice"]["password"].as_str().unwrap();
    assert!(hash.starts_with("$2"), "not a bcrypt hash: {hash}");
    assert!(!contents.contains("hunter2"));
}

#[test]
fn test_duplicate_register_fails() {
    let temp_dir = setup_test_dir();
    register(&temp_dir, "alice", "hunter2");

    cli(&temp_dir)
        .args(["register", "alice", "--password", "other"])
        .args(["--confirm-password", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_register_password_mismatch_fails() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["register", "alice", "--password", "one"])
        .args(["--confirm-password", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Passwords do not match"));

    assert!(!temp_dir.path().join("user_data.json").exists());
}

#[test]
fn test_login_success() {
    let temp_dir = setup_test_dir();
    register(&temp_dir, "alice", "hunter2");

    cli(&temp_dir)
        .args(["login", "alice", "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as 'alice'"));
}

#[test]
fn test_login_failures_do_not_reveal_which_field_was_wrong() {
    let temp_dir = setup_test_dir();
    register(&temp_dir, "alice", "hunter2");

    cli(&temp_dir)
        .args(["login", "alice", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));

    cli(&temp_dir)
        .args(["login", "nobody", "--password", "hunter2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn test_log_and_list_preserve_order() {
    let temp_dir = setup_test_dir();
    register(&temp_dir, "alice", "hunter2");

    cli(&temp_dir)
        .args(["log", "alice", "--password", "hunter2"])
        .args(["--name", "squat", "--weight", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise saved"));

    cli(&temp_dir)
        .args(["log", "alice", "--password", "hunter2"])
        .args(["--name", "bench press", "--weight", "60"])
        .args(["--image", "/photos/bench.jpg"])
        .assert()
        .success();

    cli(&temp_dir)
        .args(["list", "alice", "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. squat (100 kg)"))
        .stdout(predicate::str::contains("2. bench press (60 kg)"))
        .stdout(predicate::str::contains("image: /photos/bench.jpg"));
}

#[test]
fn test_list_empty_log() {
    let temp_dir = setup_test_dir();
    register(&temp_dir, "alice", "hunter2");

    cli(&temp_dir)
        .args(["list", "alice", "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No exercises logged yet"));
}

#[test]
fn test_log_rejects_nonpositive_weight() {
    let temp_dir = setup_test_dir();
    register(&temp_dir, "alice", "hunter2");

    cli(&temp_dir)
        .args(["log", "alice", "--password", "hunter2"])
        .args(["--name", "squat", "--weight", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn test_log_requires_valid_credentials() {
    let temp_dir = setup_test_dir();
    register(&temp_dir, "alice", "hunter2");

    cli(&temp_dir)
        .args(["log", "alice", "--password", "wrong"])
        .args(["--name", "squat", "--weight", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn test_calc_outputs_expected_numbers() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["calc", "--age", "25", "--weight", "70", "--height", "175"])
        .args(["--gender", "male", "--activity", "sedentary"])
        .args(["--goal", "weight-loss"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total Daily Energy Expenditure (TDEE) is: 2086.50",
        ))
        .stdout(predicate::str::contains(
            "Calories you should eat for Weight Loss: 1586.50",
        ))
        .stdout(predicate::str::contains("Protein: 140.00 grams"))
        .stdout(predicate::str::contains("Carbohydrates: 280.00 grams"))
        .stdout(predicate::str::contains("Fat: 70.00 grams"))
        .stdout(predicate::str::contains(
            "Total Calories from Macros: 2310.00 calories",
        ));
}

#[test]
fn test_calc_accepts_legacy_labels() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["calc", "--age", "30", "--weight", "80", "--height", "180"])
        .args(["--gender", "Female", "--activity", "Very Active"])
        .args(["--goal", "Maintaining Weight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maintaining Weight"));
}

#[test]
fn test_calc_rejects_unknown_activity_level() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["calc", "--age", "25", "--weight", "70", "--height", "175"])
        .args(["--gender", "male", "--activity", "extreme"])
        .args(["--goal", "maintain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown activity level"));
}

#[test]
fn test_calc_rejects_zero_age() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["calc", "--age", "0", "--weight", "70", "--height", "175"])
        .args(["--gender", "male", "--activity", "sedentary"])
        .args(["--goal", "maintain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("age must be positive"));
}
