// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use html_escape::{encode_double_quoted_attribute, encode_text};

use tally_core::{DailyScope, Issue, QueueScope, WeeklyScope};

use super::filters;
use super::Renderer;
use crate::error::Result;

const STYLE: &str = "body{font-family:Arial,Helvetica,sans-serif;font-size:14px}\
table{border-collapse:collapse}\
td,th{border:1px solid #ccc;padding:4px 8px;text-align:left;vertical-align:top}\
h2{margin-top:24px}";

/// Built-in HTML layouts.
pub struct HtmlRenderer {
    tracker_url: String,
}

impl HtmlRenderer {
    /// Issue keys link to `{tracker_url}/browse/{key}`.
    pub fn new(tracker_url: &str) -> Self {
        HtmlRenderer {
            tracker_url: tracker_url.trim_end_matches('/').to_string(),
        }
    }

    fn link(&self, key: &str) -> String {
        link(&self.tracker_url, key)
    }
}

impl Renderer for HtmlRenderer {
    fn render_daily(&self, scope: &DailyScope) -> Result<String> {
        let mut lines = vec![format!("<h1>Logged work: {} entries</h1>", scope.total)];

        if scope.report.is_empty() {
            lines.push("<p>No work was logged.</p>".to_string());
        }
        for author in scope.report.authors() {
            lines.push(format!(
                "<h2>{} ({})</h2>",
                encode_text(&author.author),
                author.entries.len()
            ));
            lines.push("<table>".to_string());
            lines.push(
                "<tr><th>Issue</th><th>Summary</th><th>Spent</th><th>Comment</th></tr>".to_string(),
            );
            for entry in &author.entries {
                let comment = entry
                    .comment
                    .as_deref()
                    .map(filters::comment)
                    .unwrap_or_default();
                lines.push(format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    self.link(&entry.issue_key),
                    encode_text(&entry.issue_summary),
                    encode_text(&entry.time_spent),
                    comment.replace('\n', "<br>"),
                ));
            }
            lines.push("</table>".to_string());
        }

        Ok(document(&lines))
    }

    fn render_queue(&self, scope: &QueueScope) -> Result<String> {
        let mut lines = vec![
            format!("<h1>Testing queue: {} issues</h1>", scope.tasks.len()),
            format!(
                "<p>Critical issues and bugs first, then issues waiting longer than {} days.</p>",
                scope.max_age
            ),
        ];

        if scope.tasks.is_empty() {
            lines.push("<p>The queue is empty.</p>".to_string());
        } else {
            lines.push("<ol>".to_string());
            for issue in &scope.tasks {
                lines.push(format!(
                    "<li>{} {} <small>{}</small></li>",
                    self.link(&issue.key),
                    encode_text(&issue.summary),
                    encode_text(assignee(issue)),
                ));
            }
            lines.push("</ol>".to_string());
        }

        Ok(document(&lines))
    }

    fn render_weekly(&self, scope: &WeeklyScope) -> Result<String> {
        let base_url = if scope.tracker_url.is_empty() {
            self.tracker_url.clone()
        } else {
            scope.tracker_url.trim_end_matches('/').to_string()
        };

        let sections: [(&str, &[Issue]); 5] = [
            ("In testing during the iteration", &scope.weekly_issues),
            ("Tested", &scope.tested_issues),
            ("Returned", &scope.returned_issues),
            ("Closed bugs", &scope.closed_bugs),
            ("Still in testing", &scope.testing_issues),
        ];

        let mut lines = vec!["<h1>Weekly testing report</h1>".to_string()];
        for (title, issues) in sections {
            lines.push(format!("<h2>{} ({})</h2>", title, issues.len()));
            lines.extend(issue_table(&base_url, issues));
        }

        Ok(document(&lines))
    }
}

fn link(base_url: &str, key: &str) -> String {
    let href = format!("{}/browse/{}", base_url, key);
    format!(
        "<a href=\"{}\">{}</a>",
        encode_double_quoted_attribute(&href),
        encode_text(key)
    )
}

/// Rows of key, summary, assignee and status.
fn issue_table(base_url: &str, issues: &[Issue]) -> Vec<String> {
    if issues.is_empty() {
        return vec!["<p><i>None</i></p>".to_string()];
    }
    let mut lines = vec![
        "<table>".to_string(),
        "<tr><th>Issue</th><th>Summary</th><th>Assignee</th><th>Status</th></tr>".to_string(),
    ];
    for issue in issues {
        lines.push(format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            link(base_url, &issue.key),
            encode_text(&issue.summary),
            encode_text(assignee(issue)),
            encode_text(issue.status.as_deref().unwrap_or("")),
        ));
    }
    lines.push("</table>".to_string());
    lines
}

fn assignee(issue: &Issue) -> &str {
    issue
        .assignee
        .as_ref()
        .map(|user| user.display_name.as_str())
        .unwrap_or("")
}

fn document(body: &[String]) -> String {
    let mut lines = vec![
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        format!("<style>{}</style>", STYLE),
        "</head>".to_string(),
        "<body>".to_string(),
    ];
    lines.extend(body.iter().cloned());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    lines.join("\n")
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
