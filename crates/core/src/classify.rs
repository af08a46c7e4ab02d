// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Partition issues by whether they were returned from review.

use tracing::debug;

use crate::error::Result;
use crate::history::extract;
use crate::issue::Issue;
use crate::timestamp::Window;
use crate::transition::TransitionRule;

/// Result of [`classify`]. Order inside each group carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    /// Issues whose windowed history obeys the rule.
    pub clean: Vec<Issue>,
    /// Issues that left review for an unapproved state at least once.
    pub anomalous: Vec<Issue>,
}

/// Split `issues` into clean and anomalous groups for `window`.
///
/// Issues with no status changes inside the window are clean.
pub fn classify<'a, I>(issues: I, window: &Window, rule: &TransitionRule) -> Result<Classification>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut result = Classification::default();

    for issue in issues {
        let sequence = extract(issue, window)?;
        if rule.permits(&sequence) {
            result.clean.push(issue.clone());
        } else {
            debug!(issue = %issue.key, history = %sequence, "returned from {}", rule.review_state);
            result.anomalous.push(issue.clone());
        }
    }

    Ok(result)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
