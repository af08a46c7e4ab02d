// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Testing queue snapshot.

use tracing::{debug, info};

use tally_core::{aged_budget, issue_key, rank, sort_aged, QueueScope};

use super::{Context, Report};
use crate::config::format_subject;
use crate::error::{Error, Result};
use crate::tracker::{jql, Query};

const FIELDS: &[&str] = &["summary", "assignee", "reporter", "status"];

/// Options from the command line.
#[derive(Debug, Clone, Default)]
pub struct QueueOptions {
    /// Issues in review longer than this many days count as aged.
    pub max_age: u32,
    /// Issue ids forced into the queue, as numbers or keys.
    pub push: Vec<String>,
    /// Issue ids left out of the category passes.
    pub skip: Vec<String>,
    /// Queue capacity; the configured default when `None`.
    pub max_queue: Option<usize>,
}

/// Turn a command-line issue id into a key.
///
/// A bare number gets `prefix` (`22343` becomes `TRG-22343`); a full key is
/// upper-cased.
pub fn normalize_issue_id(prefix: &str, id: &str) -> Result<String> {
    let id = id.trim();
    if let Ok(number) = id.parse::<u64>() {
        return Ok(issue_key(prefix, number));
    }
    let valid = id.split_once('-').is_some_and(|(project, number)| {
        !project.is_empty()
            && project.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !number.is_empty()
            && number.chars().all(|c| c.is_ascii_digit())
    });
    if valid {
        Ok(id.to_ascii_uppercase())
    } else {
        Err(Error::InvalidIssueId(id.to_string()))
    }
}

fn normalize_all(prefix: &str, ids: &[String]) -> Result<Vec<String>> {
    ids.iter().map(|id| normalize_issue_id(prefix, id)).collect()
}

pub fn build(ctx: &Context<'_>, options: &QueueOptions) -> Result<Report> {
    let config = ctx.config;
    let project = &config.tracker.project;
    let workflow = &config.workflow;
    let max_results = config.tracker.max_results;
    let capacity = options.max_queue.unwrap_or(config.defaults.max_queue);

    let push = normalize_all(config.key_prefix(), &options.push)?;
    let skip = normalize_all(config.key_prefix(), &options.skip)?;

    let roster = config.roster();
    let assignees = roster.manual();

    let critical = ctx.tracker.search(
        &Query::new(jql::critical_in_review(project, workflow, &assignees), max_results)
            .fields(FIELDS),
    )?;
    info!("Got {} critical issues", critical.len());

    let bugs = ctx.tracker.search(
        &Query::new(jql::bugs_in_review(project, workflow, &assignees), max_results).fields(FIELDS),
    )?;
    info!("Got {} bugs", bugs.len());

    let budget = aged_budget(capacity, critical.len(), bugs.len(), push.len());
    let aged = if budget == 0 {
        debug!("queue is full, not looking for aged issues");
        Vec::new()
    } else {
        let found = ctx.tracker.search(
            &Query::new(
                jql::aged_in_review(project, workflow, &assignees, options.max_age),
                max_results,
            )
            .fields(FIELDS)
            .with_changelog(),
        )?;
        info!("Got {} aged issues", found.len());
        sort_aged(found, &workflow.review_state, ctx.now)?
    };

    let tasks = rank(&critical, &bugs, &aged, &push, &skip, capacity, |key| {
        ctx.tracker.issue(key)
    })?;
    info!("Queued {} issues", tasks.len());

    let subject = format_subject(
        &config.email.queue_subject,
        &[ctx.now.format("%d-%m-%Y").to_string()],
    );
    Ok(Report {
        subject,
        scope: QueueScope {
            tasks,
            max_age: options.max_age,
        }
        .into(),
    })
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
