// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument errors are reported by the parser before any config is read.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn queue_requires_max_age() {
    tally()
        .arg("queue")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-age"));
}

#[test]
fn format_requires_dry_run() {
    tally()
        .args(["--format", "json", "weekly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dry-run"));
}

#[parameterized(
    bad_date = { &["daily", "--date", "05-03-2024"] },
    zero_length = { &["weekly", "--length", "0"] },
    unknown_command = { &["monthly"] },
    unknown_format = { &["--dry-run", "--format", "pdf", "daily"] },
)]
fn invalid_arguments_fail(args: &[&str]) {
    tally()
        .args(args)
        .env("TALLY_CONFIG", "/nonexistent/tally.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found").not());
}
