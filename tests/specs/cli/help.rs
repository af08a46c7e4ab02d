// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn help_lists_reports() {
    tally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("daily"))
        .stdout(predicate::str::contains("queue"))
        .stdout(predicate::str::contains("weekly"));
}

#[test]
fn no_arguments_is_an_error() {
    tally()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[parameterized(
    daily = { "daily", "--date" },
    queue = { "queue", "--max-age" },
    weekly = { "weekly", "--length" },
)]
fn command_help_shows_options(command: &str, option: &str) {
    tally()
        .arg(command)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(option))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn version_flag() {
    tally()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tally "));
}
