// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration is validated before the tracker is contacted.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[parameterized(
    daily = { &["daily"] },
    queue = { &["queue", "--max-age", "3"] },
    weekly = { &["weekly"] },
)]
fn missing_config_exits_1(args: &[&str]) {
    let temp = TempDir::new().unwrap();
    tally()
        .args(args)
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error: config file not found: tally.toml"));
}

#[test]
fn config_env_var_is_used() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("reports.toml");
    tally()
        .arg("daily")
        .env("TALLY_CONFIG", &path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("reports.toml"));
}

#[test]
fn config_flag_beats_env_var() {
    let (_temp, path) = config_dir("not = [valid");
    tally()
        .arg("--config")
        .arg(&path)
        .arg("daily")
        .env("TALLY_CONFIG", "/nonexistent/tally.toml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn roster_without_manual_members_is_rejected() {
    let content = OFFLINE_CONFIG.replace("role = \"manual\"", "role = \"auto\"");
    let (_temp, path) = config_dir(&content);
    tally()
        .arg("--config")
        .arg(&path)
        .arg("weekly")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no manual members"));
}

#[test]
fn invalid_issue_id_fails_before_tracker_contact() {
    let (_temp, path) = config_dir(OFFLINE_CONFIG);
    tally()
        .arg("--config")
        .arg(&path)
        .args(["queue", "--max-age", "3", "--push", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid issue id 'abc'"));
}

#[test]
fn unreachable_tracker_sends_nothing() {
    let (_temp, path) = config_dir(OFFLINE_CONFIG);
    tally()
        .arg("--config")
        .arg(&path)
        .args(["--dry-run", "weekly"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: tracker connection error"));
}
