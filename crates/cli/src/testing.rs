// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Fakes and fixtures shared by the unit tests of this crate.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use tally_core::{ChangeItem, HistoryBatch, Issue, User, WorklogEntry};

use crate::error::{Error, Result};
use crate::mail::{Envelope, Mailer};
use crate::tracker::{Query, Tracker};

/// Minimal valid configuration: no `[workflow]` or `[defaults]` sections.
pub const SAMPLE_CONFIG: &str = r#"
[tracker]
url = "https://jira.example.com"
user = "reporter"
password = "secret"
project = "TRG"

[smtp]
host = "smtp.example.com"
user = "reporter@example.com"
password = "mailpass"

[email]
from = "Reports <reporter@example.com>"
to = "lead@example.com, qa@example.com"
daily_subject = "Worklog for {}"
queue_subject = "Testing queue {}"
weekly_subject = "Testing {} - {}"

[[team]]
mail = "alice@example.com"
role = "manual"

[[team]]
mail = "bob@example.com"
role = "manual"

[[team]]
mail = "robot@example.com"
role = "auto"
"#;

/// Tracker timestamp string for March 2024 at the given day and hour (+0300).
pub fn stamp(day: u32, hour: u32) -> String {
    format!("2024-03-{:02}T{:02}:00:00.000+0300", day, hour)
}

pub fn at(day: u32, hour: u32) -> DateTime<FixedOffset> {
    tally_core::parse_timestamp(&stamp(day, hour)).expect("fixture timestamp")
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

/// In-memory tracker.
///
/// Searches return the issues of the first registered JQL fragment found in
/// the query; unmatched queries return nothing. Every query is recorded.
#[derive(Default)]
pub struct FakeTracker {
    responses: Vec<(String, Vec<Issue>)>,
    worklogs: HashMap<String, Vec<WorklogEntry>>,
    issues: HashMap<String, Issue>,
    fail_searches: bool,
    pub queries: RefCell<Vec<Query>>,
    pub lookups: RefCell<Vec<String>>,
}

impl FakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_search(mut self, fragment: &str, issues: Vec<Issue>) -> Self {
        self.responses.push((fragment.to_string(), issues));
        self
    }

    pub fn with_worklogs(mut self, key: &str, entries: Vec<WorklogEntry>) -> Self {
        self.worklogs.insert(key.to_string(), entries);
        self
    }

    pub fn with_issue(mut self, issue: Issue) -> Self {
        self.issues.insert(issue.key.clone(), issue);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_searches = true;
        self
    }

    pub fn jql(&self) -> Vec<String> {
        self.queries.borrow().iter().map(|q| q.jql.clone()).collect()
    }
}

impl Tracker for FakeTracker {
    fn search(&self, query: &Query) -> Result<Vec<Issue>> {
        self.queries.borrow_mut().push(query.clone());
        if self.fail_searches {
            return Err(Error::Tracker {
                status: 500,
                body: "boom".to_string(),
            });
        }
        let found = self
            .responses
            .iter()
            .find(|(fragment, _)| query.jql.contains(fragment.as_str()))
            .map(|(_, issues)| issues.clone())
            .unwrap_or_default();
        Ok(found)
    }

    fn worklogs(&self, key: &str) -> Result<Vec<WorklogEntry>> {
        Ok(self.worklogs.get(key).cloned().unwrap_or_default())
    }

    fn issue(&self, key: &str) -> Result<Option<Issue>> {
        self.lookups.borrow_mut().push(key.to_string());
        Ok(self.issues.get(key).cloned())
    }
}

/// Mailer that keeps every envelope.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: RefCell<Vec<Envelope>>,
}

impl Mailer for RecordingMailer {
    fn send(&self, envelope: &Envelope) -> Result<()> {
        self.sent.borrow_mut().push(envelope.clone());
        Ok(())
    }
}
