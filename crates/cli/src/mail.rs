// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mail delivery.
//!
//! Provides a trait-based seam over delivery so that:
//! - Reports go out through an SMTPS relay in production
//! - Dry runs print the rendered body instead
//! - Tests can record envelopes

use std::cell::RefCell;
use std::io::{self, Write};

use lettre::address::{Address, Envelope as SmtpEnvelope};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{debug, info};

use crate::config::SmtpConfig;
use crate::error::{Error, Result};

/// A rendered report ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub subject: String,
    pub from: String,
    pub to: Vec<String>,
    pub html: String,
}

impl Envelope {
    /// Recipients as a single `To` header value.
    pub fn to_header(&self) -> String {
        self.to.join(", ")
    }
}

/// Delivers one envelope. No retries.
pub trait Mailer {
    fn send(&self, envelope: &Envelope) -> Result<()>;
}

/// SMTP over implicit TLS with login credentials.
pub struct SmtpMailer {
    transport: SmtpTransport,
    sender: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let transport = SmtpTransport::relay(&config.host)
            .map_err(|e| Error::Mail(format!("invalid relay {}: {}", config.host, e)))?
            .port(config.port)
            .credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(SmtpMailer {
            transport,
            sender: config.user.clone(),
        })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, envelope: &Envelope) -> Result<()> {
        let message = build_message(envelope, &self.sender)?;
        debug!("sending '{}' to {}", envelope.subject, envelope.to_header());
        self.transport
            .send(&message)
            .map_err(|e| Error::Mail(e.to_string()))?;
        info!("sent '{}' to {} recipients", envelope.subject, envelope.to.len());
        Ok(())
    }
}

/// Build the MIME message. The SMTP envelope sender is `sender` (the
/// authenticated user), which may differ from the `From` header.
fn build_message(envelope: &Envelope, sender: &str) -> Result<Message> {
    let from: Mailbox = parse(&envelope.from)?;
    let mut builder = Message::builder().from(from).subject(envelope.subject.as_str());

    let mut recipients = Vec::with_capacity(envelope.to.len());
    for to in &envelope.to {
        let mailbox: Mailbox = parse(to)?;
        recipients.push(mailbox.email.clone());
        builder = builder.to(mailbox);
    }
    if recipients.is_empty() {
        return Err(Error::Mail("no recipients".to_string()));
    }

    let sender: Address = parse(sender)?;
    let smtp_envelope =
        SmtpEnvelope::new(Some(sender), recipients).map_err(|e| Error::Mail(e.to_string()))?;

    builder
        .envelope(smtp_envelope)
        .header(ContentType::TEXT_HTML)
        .body(envelope.html.clone())
        .map_err(|e| Error::Mail(e.to_string()))
}

fn parse<T>(value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Mail(format!("invalid address '{}': {}", value, e)))
}

/// Writes the body instead of sending it.
pub struct DryRunMailer<W: Write> {
    out: RefCell<W>,
}

impl DryRunMailer<io::Stdout> {
    pub fn stdout() -> Self {
        DryRunMailer::new(io::stdout())
    }
}

impl<W: Write> DryRunMailer<W> {
    pub fn new(out: W) -> Self {
        DryRunMailer {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Mailer for DryRunMailer<W> {
    fn send(&self, envelope: &Envelope) -> Result<()> {
        info!(
            "dry run: '{}' would go to {}",
            envelope.subject,
            envelope.to_header()
        );
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", envelope.html)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "mail_tests.rs"]
mod tests;
