// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tally-core operations.

use thiserror::Error;

/// All possible errors that can occur while analysing tracker data.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid tracker timestamp '{value}': {reason}\n  hint: expected a fixed-offset timestamp like 2024-03-05T14:20:00.000+0300")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid date '{value}'\n  hint: dates are written as YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("invalid role: '{0}'\n  hint: valid roles are: manual, auto")]
    InvalidRole(String),
}

/// A specialized Result type for tally-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
