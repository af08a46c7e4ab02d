// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Daily worklog aggregation by author.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::issue::Issue;
use crate::timestamp::parse_timestamp;

/// One accepted worklog line in the daily report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkEntry {
    pub issue_key: String,
    pub issue_summary: String,
    pub time_spent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Entries logged by a single author, in the order they were encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLog {
    pub author: String,
    pub entries: Vec<WorkEntry>,
}

/// Work entries bucketed by author display name.
///
/// Buckets keep first-seen author order. `total` always equals the sum of
/// bucket lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorklogReport {
    authors: Vec<AuthorLog>,
    total: usize,
}

impl WorklogReport {
    /// Append an entry to the bucket for `author`, creating it on first use.
    pub fn push(&mut self, author: &str, entry: WorkEntry) {
        match self.authors.iter_mut().find(|log| log.author == author) {
            Some(log) => log.entries.push(entry),
            None => self.authors.push(AuthorLog {
                author: author.to_string(),
                entries: vec![entry],
            }),
        }
        self.total += 1;
    }

    /// Entries for `author`, or `None` if they logged nothing.
    pub fn get(&self, author: &str) -> Option<&[WorkEntry]> {
        self.authors
            .iter()
            .find(|log| log.author == author)
            .map(|log| log.entries.as_slice())
    }

    pub fn authors(&self) -> &[AuthorLog] {
        &self.authors
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Collect the work logged on `target_date` by `allowed_authors`.
///
/// Authors are matched by stable identity ([`crate::User::name`]) and bucketed
/// by display name. The calendar date of a worklog is taken in the offset the
/// tracker reported it with.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidTimestamp`] if a candidate worklog has a
/// malformed start time. Dropping it would silently skew the total.
pub fn aggregate<'a, I>(
    issues: I,
    target_date: NaiveDate,
    allowed_authors: &[&str],
) -> Result<WorklogReport>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut report = WorklogReport::default();

    for issue in issues {
        for worklog in &issue.worklogs {
            let author = &worklog.author;
            if !allowed_authors.contains(&author.name.as_str()) {
                debug!("skip worklog in {} by {}", issue.key, author.name);
                continue;
            }

            let started = parse_timestamp(&worklog.started)?;
            if started.date_naive() != target_date {
                debug!(
                    "skip worklog in {}, it has started date = {}",
                    issue.key,
                    started.format("%d-%m-%Y")
                );
                continue;
            }

            debug!(
                "add worklog from {} by {} for {}",
                issue.key,
                author.name,
                started.format("%d-%m-%Y")
            );
            report.push(
                &author.display_name,
                WorkEntry {
                    issue_key: issue.key.clone(),
                    issue_summary: issue.summary.clone(),
                    time_spent: worklog.time_spent.clone(),
                    comment: worklog.comment.clone(),
                },
            );
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "worklog_tests.rs"]
mod tests;
