// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tally-core: Issue lifecycle analysis for tally reports
//!
//! This crate holds the tracker data model and the pure analysis engine used
//! by the `tally` CLI: status-history extraction, transition validity checks,
//! issue classification, worklog aggregation and testing-queue ranking. It
//! performs no I/O; the CLI feeds it issues fetched from the tracker.

pub mod classify;
pub mod error;
pub mod history;
pub mod issue;
pub mod queue;
pub mod roster;
pub mod scope;
pub mod timestamp;
pub mod transition;
pub mod worklog;

#[cfg(test)]
mod testing;

pub use classify::{classify, Classification};
pub use error::{Error, Result};
pub use history::{extract, last_entered};
pub use issue::{ChangeItem, HistoryBatch, Issue, StatusSequence, User, WorklogEntry};
pub use queue::{aged_budget, issue_key, rank, sort_aged, Queue};
pub use roster::{Member, Role, Roster};
pub use scope::{DailyScope, QueueScope, ReportKind, Scope, WeeklyScope};
pub use timestamp::{parse_date, parse_timestamp, Window};
pub use transition::{is_valid, TransitionRule};
pub use worklog::{aggregate, AuthorLog, WorkEntry, WorklogReport};
