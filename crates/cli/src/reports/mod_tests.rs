// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::render::HtmlRenderer;
use crate::testing::{RecordingMailer, SAMPLE_CONFIG};
use tally_core::{DailyScope, WorklogReport};

#[test]
fn deliver_addresses_configured_recipients() {
    let config = Config::parse(SAMPLE_CONFIG).unwrap();
    let report = Report {
        subject: "Worklog for 2024-03-05".to_string(),
        scope: DailyScope::new(WorklogReport::default()).into(),
    };
    let mailer = RecordingMailer::default();

    deliver(
        &report,
        &config,
        &HtmlRenderer::new(config.tracker_url()),
        &mailer,
    )
    .unwrap();

    let sent = mailer.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Worklog for 2024-03-05");
    assert_eq!(sent[0].from, "Reports <reporter@example.com>");
    assert_eq!(sent[0].to, vec!["lead@example.com", "qa@example.com"]);
    assert!(sent[0].html.contains("No work was logged."));
}
