// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validity of transitions out of the review state.

use serde::{Deserialize, Serialize};

use crate::issue::StatusSequence;

/// Returns true if every transition out of `review_state` went to `approved_next`.
///
/// Pairs that start anywhere else are ignored. Sequences with fewer than two
/// states are trivially valid. A bad transition is not forgiven by a later
/// correction inside the same sequence.
pub fn is_valid(sequence: &StatusSequence, review_state: &str, approved_next: &str) -> bool {
    sequence
        .pairs()
        .filter(|(from, _)| *from == review_state)
        .all(|(_, to)| to == approved_next)
}

/// The review state and the only state it may hand issues on to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRule {
    pub review_state: String,
    pub approved_next: String,
}

impl TransitionRule {
    pub fn new(review_state: impl Into<String>, approved_next: impl Into<String>) -> Self {
        TransitionRule {
            review_state: review_state.into(),
            approved_next: approved_next.into(),
        }
    }

    /// Check a sequence against this rule.
    pub fn permits(&self, sequence: &StatusSequence) -> bool {
        is_valid(sequence, &self.review_state, &self.approved_next)
    }
}

impl Default for TransitionRule {
    fn default() -> Self {
        TransitionRule::new("Testing", "Awaiting for deploy")
    }
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
