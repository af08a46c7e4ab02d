// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn command(args: &[&str]) -> Result<Command, clap::Error> {
    Cli::try_parse_from(args).map(|cli| cli.command)
}

#[test]
fn daily_without_date() {
    assert_eq!(command(&["tally", "daily"]).unwrap(), Command::Daily { date: None });
}

#[test]
fn daily_with_date() {
    assert_eq!(
        command(&["tally", "daily", "--date", "2024-03-05"]).unwrap(),
        Command::Daily {
            date: NaiveDate::from_ymd_opt(2024, 3, 5)
        }
    );
}

#[parameterized(
    wrong_order = { "05-03-2024" },
    not_a_day = { "2024-02-30" },
    word = { "yesterday" },
)]
fn daily_rejects_bad_date(value: &str) {
    assert!(command(&["tally", "daily", "--date", value]).is_err());
}

#[test]
fn queue_requires_max_age() {
    let err = command(&["tally", "queue"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn queue_collects_push_and_skip_lists() {
    let parsed = command(&[
        "tally", "queue", "-a", "3", "-p", "42", "TRG-7", "-s", "9", "-q", "20",
    ])
    .unwrap();
    assert_eq!(
        parsed,
        Command::Queue {
            max_age: 3,
            push: vec!["42".to_string(), "TRG-7".to_string()],
            skip: vec!["9".to_string()],
            max_queue: Some(20),
        }
    );
}

#[test]
fn queue_rejects_negative_age() {
    assert!(command(&["tally", "queue", "--max-age", "-1"]).is_err());
}

#[test]
fn weekly_length() {
    assert_eq!(
        command(&["tally", "weekly"]).unwrap(),
        Command::Weekly { length: None }
    );
    assert_eq!(
        command(&["tally", "weekly", "--length", "14"]).unwrap(),
        Command::Weekly { length: Some(14) }
    );
    assert!(command(&["tally", "weekly", "--length", "0"]).is_err());
}
