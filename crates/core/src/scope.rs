// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named-field scopes handed to the renderer, one per report kind.

use serde::Serialize;
use std::fmt;

use crate::issue::Issue;
use crate::queue::Queue;
use crate::worklog::WorklogReport;

/// The reports tally can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Daily,
    Queue,
    Weekly,
}

impl ReportKind {
    /// Template identifier used by the renderer.
    pub fn template(&self) -> &'static str {
        match self {
            ReportKind::Daily => "daily_report",
            ReportKind::Queue => "testing_queue",
            ReportKind::Weekly => "weekly_report",
        }
    }

    /// Field names the scope for this report exposes.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            ReportKind::Daily => &["report", "total"],
            ReportKind::Queue => &["tasks", "max_age"],
            ReportKind::Weekly => &[
                "weekly_issues",
                "tested_issues",
                "returned_issues",
                "closed_bugs",
                "testing_issues",
            ],
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template())
    }
}

/// Daily worklog digest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyScope {
    pub report: WorklogReport,
    pub total: usize,
}

impl DailyScope {
    pub fn new(report: WorklogReport) -> Self {
        let total = report.total();
        DailyScope { report, total }
    }
}

/// Testing queue snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueScope {
    pub tasks: Queue,
    /// Age threshold in days that made an issue "aged".
    pub max_age: u32,
}

/// Weekly iteration summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyScope {
    /// Base URL used to link issue keys.
    #[serde(skip)]
    pub tracker_url: String,
    pub weekly_issues: Vec<Issue>,
    pub tested_issues: Vec<Issue>,
    pub returned_issues: Vec<Issue>,
    pub closed_bugs: Vec<Issue>,
    pub testing_issues: Vec<Issue>,
}

/// Any report scope, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scope {
    Daily(DailyScope),
    Queue(QueueScope),
    Weekly(WeeklyScope),
}

impl Scope {
    pub fn kind(&self) -> ReportKind {
        match self {
            Scope::Daily(_) => ReportKind::Daily,
            Scope::Queue(_) => ReportKind::Queue,
            Scope::Weekly(_) => ReportKind::Weekly,
        }
    }
}

impl From<DailyScope> for Scope {
    fn from(scope: DailyScope) -> Self {
        Scope::Daily(scope)
    }
}

impl From<QueueScope> for Scope {
    fn from(scope: QueueScope) -> Self {
        Scope::Queue(scope)
    }
}

impl From<WeeklyScope> for Scope {
    fn from(scope: WeeklyScope) -> Self {
        Scope::Weekly(scope)
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
