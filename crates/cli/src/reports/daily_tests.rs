// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::config::Config;
use crate::testing::{at, stamp, worklog, FakeTracker, SAMPLE_CONFIG};
use tally_core::{Issue, Scope};
use yare::parameterized;

#[parameterized(
    monday = { Weekday::Mon, 3 },
    tuesday = { Weekday::Tue, 1 },
    wednesday = { Weekday::Wed, 1 },
    thursday = { Weekday::Thu, 1 },
    friday = { Weekday::Fri, 1 },
    saturday = { Weekday::Sat, 1 },
    sunday = { Weekday::Sun, 2 },
)]
fn offsets_by_weekday(weekday: Weekday, expected: i64) {
    assert_eq!(day_offset(weekday), expected);
}

#[parameterized(
    monday_reports_friday = { 4, 1 },
    sunday_reports_friday = { 3, 1 },
    tuesday_reports_monday = { 5, 4 },
)]
fn report_date_skips_weekend(today: u32, expected: u32) {
    let expected = NaiveDate::from_ymd_opt(2024, 3, expected).unwrap();
    assert_eq!(report_date(at(today, 9)), expected);
}

fn tracker() -> FakeTracker {
    FakeTracker::new()
        .on_search(
            "worklogDate",
            vec![Issue::new("TRG-1", "Login"), Issue::new("TRG-2", "Logout")],
        )
        .with_worklogs(
            "TRG-1",
            vec![
                worklog("alice@example.com", &stamp(5, 10), "1h"),
                worklog("robot@example.com", &stamp(5, 11), "5m"),
                worklog("bob@example.com", &stamp(4, 10), "2h"),
            ],
        )
        .with_worklogs(
            "TRG-2",
            vec![worklog("alice@example.com", &stamp(5, 15), "30m")],
        )
}

#[test]
fn digest_keeps_manual_authors_on_the_day() {
    let config = Config::parse(SAMPLE_CONFIG).unwrap();
    let tracker = tracker();
    let ctx = Context {
        config: &config,
        tracker: &tracker,
        now: at(6, 9),
    };

    let report = build(&ctx, None).unwrap();

    assert_eq!(report.subject, "Worklog for 2024-03-05");
    let Scope::Daily(scope) = report.scope else {
        panic!("expected a daily scope");
    };
    assert_eq!(scope.total, 2);
    let alice = scope.report.get("alice@example.com (display)").unwrap();
    assert_eq!(alice.len(), 2);
    assert_eq!(alice[1].issue_key, "TRG-2");
    assert!(scope.report.get("robot@example.com (display)").is_none());
}

#[test]
fn explicit_date_overrides_default() {
    let config = Config::parse(SAMPLE_CONFIG).unwrap();
    let tracker = tracker();
    let ctx = Context {
        config: &config,
        tracker: &tracker,
        now: at(6, 9),
    };

    let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    let report = build(&ctx, Some(date)).unwrap();

    let Scope::Daily(scope) = report.scope else {
        panic!("expected a daily scope");
    };
    assert_eq!(scope.total, 1);
    assert!(scope.report.get("bob@example.com (display)").is_some());

    let jql = tracker.jql();
    assert_eq!(jql.len(), 1);
    assert!(jql[0].contains(r#"worklogDate = "2024-03-04""#));
    assert!(!jql[0].contains("robot@example.com"));
}

#[test]
fn tracker_failure_propagates() {
    let config = Config::parse(SAMPLE_CONFIG).unwrap();
    let tracker = FakeTracker::new().failing();
    let ctx = Context {
        config: &config,
        tracker: &tracker,
        now: at(6, 9),
    };
    assert!(build(&ctx, None).is_err());
}
