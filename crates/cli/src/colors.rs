// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for the examples blocks in `--help`.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers
    pub const HEADER: u8 = 74;
    /// Commands
    pub const LITERAL: u8 = 250;
    /// Descriptions and placeholders
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

/// Colorize an examples help block.
///
/// Expects a header line ending in `:` followed by lines of the form
/// `  tally command args    Description`. The header gets the header color,
/// the command the literal color and the description the context color.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{}{}", indent, paint(codes::HEADER, trimmed));
            }
            match trimmed.find("  ") {
                Some(end) => {
                    let (command, description) = trimmed.split_at(end);
                    format!(
                        "{}{}{}",
                        indent,
                        paint(codes::LITERAL, command),
                        paint(codes::CONTEXT, description)
                    )
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
