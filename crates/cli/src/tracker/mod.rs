// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker access.
//!
//! Provides a trait-based seam over the tracker so that:
//! - The Jira REST client talks to a real server in production
//! - Report pipelines can be tested against canned issues

pub mod jira;
pub mod jql;

pub use jira::JiraClient;

use tally_core::{Issue, WorklogEntry};

use crate::error::Result;

/// A search request: JQL plus what to bring back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub jql: String,
    /// Issue fields to return (empty means the tracker default).
    pub fields: Vec<&'static str>,
    /// Whether to expand each issue's change log.
    pub changelog: bool,
    /// Result cap; searches never page past it.
    pub max_results: u32,
}

impl Query {
    pub fn new(jql: String, max_results: u32) -> Self {
        Query {
            jql,
            fields: Vec::new(),
            changelog: false,
            max_results,
        }
    }

    /// Restrict the returned fields (builder pattern).
    pub fn fields(mut self, fields: &[&'static str]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    /// Request the change log (builder pattern).
    pub fn with_changelog(mut self) -> Self {
        self.changelog = true;
        self
    }
}

/// Read-only access to the issue tracker.
pub trait Tracker {
    /// Run a search and return at most `query.max_results` issues.
    fn search(&self, query: &Query) -> Result<Vec<Issue>>;

    /// All worklog entries of an issue.
    fn worklogs(&self, key: &str) -> Result<Vec<WorklogEntry>>;

    /// Look up a single issue; `Ok(None)` if it does not exist.
    fn issue(&self, key: &str) -> Result<Option<Issue>>;
}
