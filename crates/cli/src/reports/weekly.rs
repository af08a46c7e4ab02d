// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Weekly iteration summary.

use chrono::Duration;
use tracing::info;

use tally_core::{classify, WeeklyScope, Window};

use super::{Context, Report};
use crate::config::format_subject;
use crate::error::Result;
use crate::tracker::{jql, Query};

const FIELDS: &[&str] = &["summary", "assignee", "reporter", "status", "issuetype"];

/// Build the summary of the iteration of `length` days that ended yesterday.
///
/// `length` defaults to the configured iteration length.
pub fn build(ctx: &Context<'_>, length: Option<u32>) -> Result<Report> {
    let config = ctx.config;
    let project = &config.tracker.project;
    let workflow = &config.workflow;
    let max_results = config.tracker.max_results;
    let length = length.unwrap_or(config.defaults.iteration_length);

    let roster = config.roster();
    let assignees = roster.manual();
    let search = |jql: String| ctx.tracker.search(&Query::new(jql, max_results).fields(FIELDS));

    let weekly_issues = ctx.tracker.search(
        &Query::new(
            jql::visited_review(project, workflow, &assignees, length),
            max_results,
        )
        .fields(FIELDS)
        .with_changelog(),
    )?;
    info!("Got {} weekly issues", weekly_issues.len());

    let tested_issues = search(jql::tested(project, workflow, &assignees, length))?;
    info!("Got {} tested issues", tested_issues.len());

    let window = Window::iteration(ctx.now, length);
    let returned_issues = classify(&weekly_issues, &window, &config.transition_rule())?.anomalous;
    info!("Got {} returned issues", returned_issues.len());

    let closed_bugs = search(jql::closed_bugs(project, workflow, &assignees, length))?;
    info!("Got {} closed bugs", closed_bugs.len());

    let testing_issues = search(jql::in_review(project, workflow, &assignees))?;
    info!("Got {} open tasks", testing_issues.len());

    let first_day = ctx.now - Duration::days(i64::from(length));
    let last_day = ctx.now - Duration::days(1);
    let subject = format_subject(
        &config.email.weekly_subject,
        &[
            first_day.format("%d.%m").to_string(),
            last_day.format("%d.%m").to_string(),
        ],
    );

    Ok(Report {
        subject,
        scope: WeeklyScope {
            tracker_url: config.tracker_url().to_string(),
            weekly_issues,
            tested_issues,
            returned_issues,
            closed_bugs,
            testing_issues,
        }
        .into(),
    })
}

#[cfg(test)]
#[path = "weekly_tests.rs"]
mod tests;
