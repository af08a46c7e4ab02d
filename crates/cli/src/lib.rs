// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tallyrs - team status reports from an issue tracker.
//!
//! This crate provides the I/O side of the `tally` CLI: it loads the
//! configuration, queries the tracker, runs the analysis from `tally_core`,
//! renders the result as HTML and mails it.
//!
//! # Main Components
//!
//! - [`Config`] - TOML configuration with environment overrides for secrets
//! - [`tracker`] - The [`Tracker`](tracker::Tracker) seam and its Jira REST client
//! - [`reports`] - Daily, queue and weekly pipelines
//! - [`render`] - HTML and JSON renderers
//! - [`mail`] - SMTP delivery and the dry-run printer
//! - [`Error`] - Error types for all operations

mod cli;
mod colors;
mod env;

pub mod config;
pub mod error;
pub mod mail;
pub mod render;
pub mod reports;
pub mod tracker;

#[cfg(test)]
mod testing;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use chrono::Local;
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::resolve_config_path;
use crate::mail::{DryRunMailer, Mailer, SmtpMailer};
use crate::render::{HtmlRenderer, JsonRenderer, Renderer};
use crate::reports::queue::QueueOptions;
use crate::reports::{daily, queue, weekly, Context, Report};
use crate::tracker::JiraClient;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects DEBUG over INFO.
pub fn init_logging(verbose: bool) {
    let builder = FmtSubscriber::builder().with_writer(std::io::stderr);
    let result = if env::rust_log() {
        builder
            .with_env_filter(EnvFilter::from_default_env())
            .try_init()
    } else {
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        builder.with_max_level(level).try_init()
    };
    // Already installed (e.g. by a test harness)
    if result.is_err() {
        debug!("log subscriber already installed");
    }
}

/// Build the report `cli` asks for and deliver it.
///
/// Configuration is loaded and validated before the tracker is contacted, and
/// nothing is sent unless the whole pipeline succeeds.
pub fn run(cli: Cli) -> Result<()> {
    let path = resolve_config_path(cli.config);
    debug!("loading config from {}", path.display());
    let mut config = Config::load(&path)?;
    config.apply_env_overrides();

    let tracker = JiraClient::new(&config.tracker)?;
    let ctx = Context {
        config: &config,
        tracker: &tracker,
        now: Local::now().fixed_offset(),
    };
    let report = build(&ctx, cli.command)?;

    let renderer: Box<dyn Renderer> = match cli.format.unwrap_or_default() {
        OutputFormat::Html => Box::new(HtmlRenderer::new(config.tracker_url())),
        OutputFormat::Json => Box::new(JsonRenderer),
    };
    let mailer: Box<dyn Mailer> = if cli.dry_run {
        Box::new(DryRunMailer::stdout())
    } else {
        Box::new(SmtpMailer::new(&config.smtp)?)
    };

    reports::deliver(&report, &config, renderer.as_ref(), mailer.as_ref())
}

fn build(ctx: &Context<'_>, command: Command) -> Result<Report> {
    match command {
        Command::Daily { date } => daily::build(ctx, date),
        Command::Queue {
            max_age,
            push,
            skip,
            max_queue,
        } => queue::build(
            ctx,
            &QueueOptions {
                max_age,
                push,
                skip,
                max_queue,
            },
        ),
        Command::Weekly { length } => weekly::build(ctx, length),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
