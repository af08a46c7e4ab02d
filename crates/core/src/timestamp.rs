// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker timestamp parsing and analysis windows.
//!
//! The tracker reports every timestamp with a fixed UTC offset, for example
//! `2024-03-05T14:20:00.000+0300`. A value in any other shape means the
//! tracker schema changed under us, so parsing failures are fatal.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate};

use crate::error::{Error, Result};

/// Format of tracker timestamps (fractional seconds, numeric offset).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parse a tracker timestamp, keeping its original offset.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| Error::InvalidTimestamp {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

/// Closed time interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl Window {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Window { start, end }
    }

    /// The iteration that ended yesterday: `[now - (length + 1)d, now - 1d]`.
    pub fn iteration(now: DateTime<FixedOffset>, length_days: u32) -> Self {
        let length = i64::from(length_days);
        Window {
            start: now - Duration::days(length + 1),
            end: now - Duration::days(1),
        }
    }

    /// Returns true if `at` lies inside the window, bounds included.
    pub fn contains(&self, at: DateTime<FixedOffset>) -> bool {
        self.start <= at && at <= self.end
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
