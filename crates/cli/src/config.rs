// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report configuration.
//!
//! Configuration is stored in a TOML file (`tally.toml` by default) and includes:
//! - `[tracker]`: Jira URL, credentials, project and query cap
//! - `[smtp]`: mail relay and credentials
//! - `[email]`: sender, recipients and subject templates
//! - `[[team]]`: roster entries with a `manual` or `auto` role
//! - `[workflow]`: status and field names the reports query for
//! - `[defaults]`: tunables for iteration length and queue capacity

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tally_core::{Member, Roster, TransitionRule};

use crate::env;
use crate::error::{Error, Result};

const DEFAULT_CONFIG_FILE: &str = "tally.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub tracker: TrackerConfig,
    pub smtp: SmtpConfig,
    pub email: EmailConfig,
    /// Team roster; membership is by tracker identity.
    #[serde(default)]
    pub team: Vec<Member>,
    #[serde(default)]
    pub workflow: WorkflowConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Issue tracker connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Base URL, e.g. `https://jira.example.com`.
    pub url: String,
    pub user: String,
    #[serde(default)]
    pub password: String,
    /// Project key used in every query.
    pub project: String,
    /// Prefix for issue keys given by number on the command line
    /// (default: the project key).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_prefix: Option<String>,
    /// Result cap for every search (default: 500).
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

/// SMTP relay. The connection uses implicit TLS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: String,
}

/// Addressing and subject templates. Subjects take `{}` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub from: String,
    /// Whitespace or comma separated recipient list.
    pub to: String,
    pub daily_subject: String,
    pub queue_subject: String,
    pub weekly_subject: String,
}

/// Workflow vocabulary of the tracked project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Status meaning "under test".
    pub review_state: String,
    /// The only status a tested issue may move on to.
    pub approved_next: String,
    pub closed_state: String,
    pub bug_type: String,
    pub critical_priority: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        let rule = TransitionRule::default();
        WorkflowConfig {
            review_state: rule.review_state,
            approved_next: rule.approved_next,
            closed_state: "Closed".to_string(),
            bug_type: "Bug".to_string(),
            critical_priority: "Критический".to_string(),
        }
    }
}

/// Tunables with command-line overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Weekly report length in days (default: 7).
    pub iteration_length: u32,
    /// Testing queue capacity (default: 50).
    pub max_queue: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            iteration_length: 7,
            max_queue: 50,
        }
    }
}

fn default_max_results() -> u32 {
    500
}

fn default_smtp_port() -> u16 {
    465
}

impl Config {
    /// Loads and validates configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist and
    /// [`Error::Config`] if it cannot be parsed or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Config(format!("failed to read config: {}", e)),
        })?;
        Self::parse(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("tracker.url", &self.tracker.url),
            ("tracker.project", &self.tracker.project),
            ("smtp.host", &self.smtp.host),
            ("email.from", &self.email.from),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{} cannot be empty", field)));
            }
        }
        if self.recipients().is_empty() {
            return Err(Error::Config("email.to has no recipients".to_string()));
        }
        if self.roster().manual().is_empty() {
            return Err(Error::Config(
                "team has no manual members\n  hint: add [[team]] entries with role = \"manual\""
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Replaces passwords with `TALLY_TRACKER_PASSWORD` / `TALLY_SMTP_PASSWORD` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Some(password) = env::tracker_password() {
            self.tracker.password = password;
        }
        if let Some(password) = env::smtp_password() {
            self.smtp.password = password;
        }
    }

    /// The team roster as an immutable value.
    pub fn roster(&self) -> Roster {
        Roster::new(self.team.clone())
    }

    /// The review-state rule used for returned-issue detection.
    pub fn transition_rule(&self) -> TransitionRule {
        TransitionRule::new(&self.workflow.review_state, &self.workflow.approved_next)
    }

    /// Individual recipient addresses.
    pub fn recipients(&self) -> Vec<String> {
        self.email
            .to
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    /// Prefix for issue keys given by number.
    pub fn key_prefix(&self) -> &str {
        self.tracker
            .key_prefix
            .as_deref()
            .unwrap_or(&self.tracker.project)
    }

    /// Tracker base URL without a trailing slash.
    pub fn tracker_url(&self) -> &str {
        self.tracker.url.trim_end_matches('/')
    }
}

/// Pick the config file: `--config`, then `TALLY_CONFIG`, then `./tally.toml`.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(env::config_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Fill `{}` placeholders in a subject template in order.
///
/// Numbered placeholders (`{0}`, `{1}`) pick an argument by index. Unknown
/// placeholders are kept verbatim.
pub fn format_subject(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let inner = &after[..close];
        let arg = if inner.is_empty() {
            next += 1;
            args.get(next - 1)
        } else {
            inner.parse::<usize>().ok().and_then(|i| args.get(i))
        };
        match arg {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
