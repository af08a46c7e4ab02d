// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text filters for worklog comments.

use regex::Regex;
use std::sync::LazyLock;

// Hard-coded patterns, exercised by the tests below.
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?s)\{code.*?\}.*?\{.*?code\}") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static NOFORMAT_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?s)\{noformat.*?\}.*?\{noformat\}") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Tracker text icons and their inline HTML replacements.
const EMOJIS: &[(&str, &str)] = &[
    (
        "(+)",
        r#"<span style="color:#14892c;font-weight:bold" title="plus">&#x2795;</span>"#,
    ),
    (
        "(-)",
        r#"<span style="color:#d04437;font-weight:bold" title="minus">&#x2796;</span>"#,
    ),
    (
        "(?)",
        r#"<span style="color:#3b73af;font-weight:bold" title="question">&#x2753;</span>"#,
    ),
    (
        "(!)",
        r#"<span style="color:#f6c342;font-weight:bold" title="alarm">&#x26A0;</span>"#,
    ),
    (
        "(/)",
        r#"<span style="color:#14892c;font-weight:bold" title="check">&#x2714;</span>"#,
    ),
];

/// Drop `{code}...{code}` and `{noformat}...{noformat}` fragments.
///
/// Each fragment becomes a single space; fragments may span lines.
pub fn cleanup(value: &str) -> String {
    let value = CODE_RE.replace_all(value, " ");
    NOFORMAT_RE.replace_all(&value, " ").into_owned()
}

/// Replace tracker text icons such as `(+)` with inline HTML.
///
/// Run this after HTML escaping, since it emits markup.
pub fn fix_emoji(value: &str) -> String {
    EMOJIS
        .iter()
        .fold(value.to_string(), |text, (icon, html)| text.replace(icon, html))
}

/// Prepare a worklog comment for an HTML body.
pub fn comment(value: &str) -> String {
    let cleaned = cleanup(value);
    fix_emoji(&html_escape::encode_text(cleaned.trim()))
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
