// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status history extraction from an issue's change log.

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::error::Result;
use crate::issue::{Issue, StatusSequence};
use crate::timestamp::{parse_timestamp, Window};

/// Collect the statuses an issue entered inside `window`, oldest first.
///
/// Only `status` items contribute; their "to" value is appended in change log
/// order. Batches without a status item are never parsed, so an unrelated
/// malformed timestamp does not abort the run.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidTimestamp`] if a status batch carries a
/// timestamp in an unexpected format.
pub fn extract(issue: &Issue, window: &Window) -> Result<StatusSequence> {
    let mut states = Vec::new();

    for batch in &issue.changelog {
        for item in batch.items.iter().filter(|item| item.is_status()) {
            let at = parse_timestamp(&batch.created)?;
            let from = item.from.as_deref().unwrap_or_default();
            let to = item.to.as_deref().unwrap_or_default();

            if window.contains(at) {
                debug!(issue = %issue.key, "add {} {} to {}", at.format("%Y-%m-%d"), from, to);
                states.push(to.to_string());
            } else {
                debug!(issue = %issue.key, "skip {} {} to {}", at.format("%Y-%m-%d"), from, to);
            }
        }
    }

    Ok(StatusSequence::new(states))
}

/// Timestamp of the most recent transition into `state`, if any.
pub fn last_entered(issue: &Issue, state: &str) -> Result<Option<DateTime<FixedOffset>>> {
    for batch in issue.changelog.iter().rev() {
        let entered = batch
            .items
            .iter()
            .any(|item| item.is_status() && item.to.as_deref() == Some(state));
        if entered {
            return parse_timestamp(&batch.created).map(Some);
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
