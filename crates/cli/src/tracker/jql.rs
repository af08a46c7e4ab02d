// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JQL builders for the report queries.
//!
//! Every value is quoted, so statuses with spaces ("Awaiting for deploy") and
//! non-ASCII priority names work unchanged.

use chrono::NaiveDate;

use crate::config::WorkflowConfig;

/// Quote a JQL string literal.
pub fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Format a list for `IN (...)`, e.g. `"aaa", "bbb", "ccc"`.
pub fn list(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| quote(v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The last `days` whole days, ending yesterday.
pub fn period(days: u32) -> String {
    format!("startOfDay(-{}), endOfDay(-1)", days)
}

/// Issues with time logged on `date` by `authors`.
pub fn worklogs_on(project: &str, date: NaiveDate, authors: &[&str]) -> String {
    format!(
        "project = {} AND worklogDate = {} AND timespent > 0 AND worklogAuthor IN ({})",
        quote(project),
        quote(&date.format("%Y-%m-%d").to_string()),
        list(authors)
    )
}

/// Critical-priority issues currently in review.
pub fn critical_in_review(project: &str, workflow: &WorkflowConfig, assignees: &[&str]) -> String {
    format!(
        "project = {} AND status = {} AND assignee IN ({}) AND priority = {}",
        quote(project),
        quote(&workflow.review_state),
        list(assignees),
        quote(&workflow.critical_priority)
    )
}

/// Bugs currently in review.
pub fn bugs_in_review(project: &str, workflow: &WorkflowConfig, assignees: &[&str]) -> String {
    format!(
        "project = {} AND issuetype = {} AND assignee IN ({}) AND status = {}",
        quote(project),
        quote(&workflow.bug_type),
        list(assignees),
        quote(&workflow.review_state)
    )
}

/// Issues in review that entered it more than `max_age` days ago.
pub fn aged_in_review(
    project: &str,
    workflow: &WorkflowConfig,
    assignees: &[&str],
    max_age: u32,
) -> String {
    format!(
        "project = {} AND status = {} AND assignee IN ({}) AND status CHANGED TO {} BEFORE -{}d",
        quote(project),
        quote(&workflow.review_state),
        list(assignees),
        quote(&workflow.review_state),
        max_age
    )
}

/// Issues that were in review at some point of the last `days` days.
pub fn visited_review(
    project: &str,
    workflow: &WorkflowConfig,
    assignees: &[&str],
    days: u32,
) -> String {
    let period = period(days);
    format!(
        "project = {} AND status WAS {} DURING ({}) AND assignee WAS IN ({}) DURING ({})",
        quote(project),
        quote(&workflow.review_state),
        period,
        list(assignees),
        period
    )
}

/// Issues that were in review during the last `days` days and have left it.
pub fn tested(project: &str, workflow: &WorkflowConfig, assignees: &[&str], days: u32) -> String {
    format!(
        "{} AND status != {}",
        visited_review(project, workflow, assignees, days),
        quote(&workflow.review_state)
    )
}

/// Bugs closed during the last `days` days.
pub fn closed_bugs(project: &str, workflow: &WorkflowConfig, assignees: &[&str], days: u32) -> String {
    format!(
        "project = {} AND issuetype = {} AND status CHANGED TO {} DURING ({}) AND assignee WAS IN ({})",
        quote(project),
        quote(&workflow.bug_type),
        quote(&workflow.closed_state),
        period(days),
        list(assignees)
    )
}

/// Issues currently in review.
pub fn in_review(project: &str, workflow: &WorkflowConfig, assignees: &[&str]) -> String {
    format!(
        "project = {} AND status = {} AND assignee IN ({})",
        quote(project),
        quote(&workflow.review_state),
        list(assignees)
    )
}

#[cfg(test)]
#[path = "jql_tests.rs"]
mod tests;
