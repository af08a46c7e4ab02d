// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Testing queue ranking.
//!
//! The queue is filled in priority order: critical issues, then bugs, then
//! issues that have waited in review the longest. Skip and push lists give the
//! team a manual override; a pushed issue always lands in the queue.

use chrono::{DateTime, FixedOffset};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;
use tracing::debug;

use crate::error::Result;
use crate::history::last_entered;
use crate::issue::Issue;

/// Issues keyed by issue key, kept in insertion order.
///
/// The first insertion of a key wins; later ones are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Queue {
    entries: Vec<Issue>,
    keys: HashSet<String>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `issue` unless its key is already queued. Returns true if inserted.
    pub fn insert(&mut self, issue: Issue) -> bool {
        if !self.keys.insert(issue.key.clone()) {
            return false;
        }
        self.entries.push(issue);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn get(&self, key: &str) -> Option<&Issue> {
        self.entries.iter().find(|issue| issue.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|issue| issue.key.as_str())
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Queue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for issue in &self.entries {
            map.serialize_entry(&issue.key, issue)?;
        }
        map.end()
    }
}

/// Format an issue key from a project prefix and issue number.
pub fn issue_key(prefix: &str, number: u64) -> String {
    format!("{}-{}", prefix, number)
}

/// Slots left for aged issues once critical, bug and pushed issues are counted.
///
/// Never negative: an overfull queue leaves zero slots.
pub fn aged_budget(capacity: usize, critical: usize, bugs: usize, pushed: usize) -> usize {
    capacity
        .saturating_sub(critical)
        .saturating_sub(bugs)
        .saturating_sub(pushed)
}

/// Order issues by when they last entered `review_state`, oldest first.
///
/// Issues that never transitioned into review (created directly in it) are
/// treated as entering at `now`, which puts them last. The sort is stable.
pub fn sort_aged(
    issues: Vec<Issue>,
    review_state: &str,
    now: DateTime<FixedOffset>,
) -> Result<Vec<Issue>> {
    let mut keyed = issues
        .into_iter()
        .map(|issue| {
            let entered = last_entered(&issue, review_state)?.unwrap_or(now);
            Ok((entered, issue))
        })
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by_key(|(entered, _)| *entered);
    Ok(keyed.into_iter().map(|(_, issue)| issue).collect())
}

/// Build the testing queue.
///
/// `aged` must already be sorted oldest first (see [`sort_aged`]); only its
/// first [`aged_budget`] entries are considered. Keys in `skip_ids` are left
/// out of the three category passes. Each id in `push_ids` is then added in
/// order regardless of `skip_ids`, taken from the given collections when
/// present and looked up through `fetch` otherwise. A `fetch` returning
/// `Ok(None)` drops that id; an `Err` aborts.
pub fn rank<F, E>(
    critical: &[Issue],
    bugs: &[Issue],
    aged: &[Issue],
    push_ids: &[String],
    skip_ids: &[String],
    capacity: usize,
    mut fetch: F,
) -> std::result::Result<Queue, E>
where
    F: FnMut(&str) -> std::result::Result<Option<Issue>, E>,
{
    let skip: HashSet<&str> = skip_ids.iter().map(String::as_str).collect();
    let budget = aged_budget(capacity, critical.len(), bugs.len(), push_ids.len());
    let mut queue = Queue::new();

    let candidates = critical
        .iter()
        .chain(bugs.iter())
        .chain(aged.iter().take(budget));
    for issue in candidates {
        if skip.contains(issue.key.as_str()) {
            debug!("skip {} in the queue", issue.key);
            continue;
        }
        queue.insert(issue.clone());
    }

    for key in push_ids {
        if queue.contains(key) {
            continue;
        }
        let given = critical
            .iter()
            .chain(bugs.iter())
            .chain(aged.iter())
            .find(|issue| issue.key == *key)
            .cloned();
        let found = match given {
            Some(issue) => Some(issue),
            None => fetch(key)?,
        };
        match found {
            Some(issue) => {
                debug!("push {} to the queue", key);
                queue.insert(issue);
            }
            None => debug!("pushed issue {} not found, dropping it", key),
        }
    }

    Ok(queue)
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
