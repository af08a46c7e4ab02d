// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::colors;

/// Parse a `YYYY-MM-DD` date argument.
fn date_arg(s: &str) -> Result<NaiveDate, String> {
    tally_core::parse_date(s).map_err(|e| e.to_string())
}

/// Body format for `--dry-run` output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The rendered mail body
    #[default]
    Html,
    /// The report scope as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "tally")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Team status reports from the issue tracker, delivered by mail")]
#[command(
    long_about = "Team status reports from the issue tracker, delivered by mail.\n\n\
    Queries the tracker, builds a daily worklog digest, a testing queue or a weekly \
    iteration summary, and mails it as HTML to the configured recipients."
)]
pub struct Cli {
    /// Configuration file [default: $TALLY_CONFIG or ./tally.toml]
    #[arg(short = 'c', long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log filtering decisions
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Print the report instead of sending it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Output format for --dry-run
    #[arg(short = 'o', long = "format", global = true, value_enum, requires = "dry_run")]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mail the worklog digest of one day
    #[command(after_help = colors::examples("\
Examples:
  tally daily                      Report the last working day
  tally daily --date 2024-03-05    Report a specific day
  tally daily --dry-run            Print the digest instead of mailing it"))]
    Daily {
        /// Day to report [default: the last working day]
        #[arg(short = 'd', long, value_name = "YYYY-MM-DD", value_parser = date_arg)]
        date: Option<NaiveDate>,
    },

    /// Mail the testing queue
    #[command(after_help = colors::examples("\
Examples:
  tally queue -a 3                 Queue issues in testing longer than 3 days
  tally queue -a 3 -p 42 TRG-7     Force issues into the queue
  tally queue -a 3 -s 42 -q 20     Skip an issue and cap the queue at 20"))]
    Queue {
        /// Days in testing after which an issue counts as aged
        #[arg(short = 'a', long, value_name = "days")]
        max_age: u32,

        /// Issues to force into the queue (number or key)
        #[arg(short = 'p', long, num_args = 1.., value_name = "id")]
        push: Vec<String>,

        /// Issues to leave out of the queue (number or key)
        #[arg(short = 's', long, num_args = 1.., value_name = "id")]
        skip: Vec<String>,

        /// Queue capacity [default: from config, 50]
        #[arg(short = 'q', long, value_name = "n")]
        max_queue: Option<usize>,
    },

    /// Mail the summary of the iteration that ended yesterday
    #[command(after_help = colors::examples("\
Examples:
  tally weekly                     Summarize the configured iteration length
  tally weekly -l 14               Summarize the last two weeks"))]
    Weekly {
        /// Iteration length in days [default: from config, 7]
        #[arg(short = 'l', long, value_name = "days", value_parser = clap::value_parser!(u32).range(1..))]
        length: Option<u32>,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
