// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker data types consumed by the analysis engine.
//!
//! This module contains the read-only records supplied by the issue tracker:
//! Issue, User, HistoryBatch, ChangeItem and WorklogEntry, plus the derived
//! StatusSequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field name of change items that record a workflow status change.
pub const STATUS_FIELD: &str = "status";

/// A tracker account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identity (login or e-mail) used for roster membership.
    pub name: String,
    /// Human-readable name shown in reports.
    pub display_name: String,
}

impl User {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        User {
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}

/// A single field-level change inside a history batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeItem {
    /// Name of the changed field (only `status` matters for lifecycle analysis).
    pub field: String,
    /// Display value before the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Display value after the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl ChangeItem {
    /// Creates a status change item.
    pub fn status(from: Option<&str>, to: &str) -> Self {
        ChangeItem {
            field: STATUS_FIELD.to_string(),
            from: from.map(String::from),
            to: Some(to.to_string()),
        }
    }

    /// Returns true if this item records a workflow status change.
    pub fn is_status(&self) -> bool {
        self.field == STATUS_FIELD
    }
}

/// A group of field changes the tracker recorded under one timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryBatch {
    /// Raw tracker timestamp (parsed lazily, see [`crate::timestamp`]).
    pub created: String,
    /// Field-level changes in tracker order.
    pub items: Vec<ChangeItem>,
}

impl HistoryBatch {
    pub fn new(created: impl Into<String>, items: Vec<ChangeItem>) -> Self {
        HistoryBatch {
            created: created.into(),
            items,
        }
    }
}

/// Time logged against an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorklogEntry {
    /// Who logged the work.
    pub author: User,
    /// Raw tracker timestamp of when the work started.
    pub started: String,
    /// Human-readable duration, e.g. `2h 30m`.
    pub time_spent: String,
    /// Free-form description of the work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// The primary entity: a tracker issue as returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Project-prefixed key, e.g. `TRG-22343`.
    pub key: String,
    /// Short description of the work.
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<User>,
    /// Current workflow status name, when the query requested it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Change history in chronological order (empty unless expanded).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changelog: Vec<HistoryBatch>,
    /// Work log entries (empty unless fetched).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub worklogs: Vec<WorklogEntry>,
}

impl Issue {
    /// Creates an issue with only a key and summary set.
    pub fn new(key: impl Into<String>, summary: impl Into<String>) -> Self {
        Issue {
            key: key.into(),
            summary: summary.into(),
            assignee: None,
            reporter: None,
            status: None,
            issue_type: None,
            priority: None,
            changelog: Vec::new(),
            worklogs: Vec::new(),
        }
    }

    /// Sets the change history (builder pattern).
    pub fn with_changelog(mut self, changelog: Vec<HistoryBatch>) -> Self {
        self.changelog = changelog;
        self
    }

    /// Sets the work log entries (builder pattern).
    pub fn with_worklogs(mut self, worklogs: Vec<WorklogEntry>) -> Self {
        self.worklogs = worklogs;
        self
    }

    /// Sets the assignee (builder pattern).
    pub fn with_assignee(mut self, assignee: User) -> Self {
        self.assignee = Some(assignee);
        self
    }
}

/// Ordered status names an issue passed through inside a time window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusSequence(Vec<String>);

impl StatusSequence {
    pub fn new(states: Vec<String>) -> Self {
        StatusSequence(states)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Adjacent `(from, to)` pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl<S: Into<String>> FromIterator<S> for StatusSequence {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        StatusSequence(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for StatusSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
