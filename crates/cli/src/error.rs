// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the tallyrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config file not found: {0}\n  hint: create it or point --config / TALLY_CONFIG at one")]
    ConfigNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Analysis(#[from] tally_core::Error),

    #[error("tracker request failed with HTTP {status}: {body}")]
    Tracker { status: u16, body: String },

    #[error("tracker connection error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mail delivery failed: {0}")]
    Mail(String),

    #[error("invalid issue id '{0}'\n  hint: use a number (22343) or a full key (TRG-22343)")]
    InvalidIssueId(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tallyrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
