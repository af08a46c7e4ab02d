// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Daily worklog digest.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Weekday};
use tracing::info;

use tally_core::{aggregate, DailyScope};

use super::{Context, Report};
use crate::config::format_subject;
use crate::error::Result;
use crate::tracker::{jql, Query};

const FIELDS: &[&str] = &["summary"];

/// Days back to the last working day: Monday looks at Friday, Sunday at Friday
/// too, every other day at yesterday.
pub fn day_offset(weekday: Weekday) -> i64 {
    match weekday {
        Weekday::Mon => 3,
        Weekday::Sun => 2,
        _ => 1,
    }
}

/// The day a run at `now` reports on.
pub fn report_date(now: DateTime<FixedOffset>) -> NaiveDate {
    let today = now.date_naive();
    today - Duration::days(day_offset(today.weekday()))
}

/// Build the digest for `date`, or for [`report_date`] when not given.
pub fn build(ctx: &Context<'_>, date: Option<NaiveDate>) -> Result<Report> {
    let config = ctx.config;
    let date = date.unwrap_or_else(|| report_date(ctx.now));
    let roster = config.roster();
    let authors = roster.manual();

    let query = Query::new(
        jql::worklogs_on(&config.tracker.project, date, &authors),
        config.tracker.max_results,
    )
    .fields(FIELDS);
    let mut issues = ctx.tracker.search(&query)?;
    info!("Got {} issues with work logged on {}", issues.len(), date);

    // Search results carry a truncated worklog list, so fetch the full one
    for issue in &mut issues {
        issue.worklogs = ctx.tracker.worklogs(&issue.key)?;
    }

    let report = aggregate(&issues, date, &authors)?;
    info!("Got {} worklog entries", report.total());

    let subject = format_subject(
        &config.email.daily_subject,
        &[date.format("%Y-%m-%d").to_string()],
    );
    Ok(Report {
        subject,
        scope: DailyScope::new(report).into(),
    })
}

#[cfg(test)]
#[path = "daily_tests.rs"]
mod tests;
