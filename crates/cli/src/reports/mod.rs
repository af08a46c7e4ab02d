// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report pipelines.
//!
//! Each report queries the tracker, runs the analysis from `tally_core` and
//! assembles a [`Report`]. Delivery happens only after the whole pipeline has
//! succeeded, so a failing run sends nothing.

pub mod daily;
pub mod queue;
pub mod weekly;

use chrono::{DateTime, FixedOffset};
use tally_core::Scope;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::mail::{Envelope, Mailer};
use crate::render::Renderer;
use crate::tracker::Tracker;

/// Everything a pipeline reads.
pub struct Context<'a> {
    pub config: &'a Config,
    pub tracker: &'a dyn Tracker,
    /// Wall clock of the run; all relative dates derive from it.
    pub now: DateTime<FixedOffset>,
}

/// An assembled report awaiting rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub subject: String,
    pub scope: Scope,
}

/// Render `report` and hand it to `mailer`.
pub fn deliver(
    report: &Report,
    config: &Config,
    renderer: &dyn Renderer,
    mailer: &dyn Mailer,
) -> Result<()> {
    debug!("rendering {}", report.scope.kind());
    let html = renderer.render(&report.scope)?;
    let envelope = Envelope {
        subject: report.subject.clone(),
        from: config.email.from.clone(),
        to: config.recipients(),
        html,
    };
    mailer.send(&envelope)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
