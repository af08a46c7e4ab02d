// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Fixture builders shared by the unit tests of this crate.

use chrono::{DateTime, FixedOffset};

use crate::issue::{ChangeItem, HistoryBatch, Issue, User, WorklogEntry};
use crate::timestamp::{parse_timestamp, Window};

/// Tracker timestamp string for March 2024 at the given day and hour (+0300).
pub fn stamp(day: u32, hour: u32) -> String {
    format!("2024-03-{:02}T{:02}:00:00.000+0300", day, hour)
}

pub fn at(day: u32, hour: u32) -> DateTime<FixedOffset> {
    parse_timestamp(&stamp(day, hour)).expect("fixture timestamp")
}

/// Window covering March `first..=last` 2024, whole days.
pub fn march(first: u32, last: u32) -> Window {
    Window::new(
        parse_timestamp(&format!("2024-03-{:02}T00:00:00.000+0300", first)).unwrap(),
        parse_timestamp(&format!("2024-03-{:02}T23:59:59.999+0300", last)).unwrap(),
    )
}

/// Issue whose change log walks through `states`, one batch per day starting
/// on `first_day`. The first state is treated as the initial value.
pub fn walked(key: &str, first_day: u32, states: &[&str]) -> Issue {
    let changelog = states
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            HistoryBatch::new(
                stamp(first_day + i as u32, 12),
                vec![ChangeItem::status(Some(pair[0]), pair[1])],
            )
        })
        .collect();
    Issue::new(key, format!("Summary of {}", key)).with_changelog(changelog)
}

/// Issue whose change log enters each of `states` in turn, one batch per day.
pub fn entering(key: &str, first_day: u32, states: &[&str]) -> Issue {
    let mut previous: Option<&str> = None;
    let changelog = states
        .iter()
        .enumerate()
        .map(|(i, state)| {
            let batch = HistoryBatch::new(
                stamp(first_day + i as u32, 12),
                vec![ChangeItem::status(previous, state)],
            );
            previous = Some(*state);
            batch
        })
        .collect();
    Issue::new(key, format!("Summary of {}", key)).with_changelog(changelog)
}

pub fn user(name: &str) -> User {
    User::new(name, format!("{} (display)", name))
}

pub fn worklog(author: &str, started: &str, spent: &str) -> WorklogEntry {
    WorklogEntry {
        author: user(author),
        started: started.to_string(),
        time_spent: spent.to_string(),
        comment: Some(format!("{} worked", author)),
    }
}
