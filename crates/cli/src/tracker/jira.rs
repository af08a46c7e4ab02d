// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jira REST API v2 client.
//!
//! Blocking HTTP with basic auth. Wire types mirror the subset of the Jira
//! JSON the reports read and are converted into `tally_core` types at this
//! boundary.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use tally_core::{ChangeItem, HistoryBatch, Issue, User, WorklogEntry};

use super::{Query, Tracker};
use crate::config::TrackerConfig;
use crate::error::{Error, Result};

const API_PREFIX: &str = "rest/api/2";
const REQUEST_TIMEOUT_SECS: u64 = 60;
const LOOKUP_FIELDS: &str = "summary,assignee,reporter,status,issuetype,priority";

/// Tracker backed by a Jira server.
pub struct JiraClient {
    http: Client,
    base_url: String,
    user: String,
    password: String,
}

impl JiraClient {
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(JiraClient {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            user: config.user.clone(),
            password: config.password.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_PREFIX, path)
    }

    fn send(&self, path: &str, params: &[(&str, String)]) -> Result<Response> {
        let url = self.endpoint(path);
        debug!("GET {}", url);
        Ok(self
            .http
            .get(&url)
            .basic_auth(&self.user, Some(&self.password))
            .query(params)
            .send()?)
    }

    /// GET a JSON resource. Any non-2xx status, 404 included, is an error.
    fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let response = self.send(path, params)?;
        decode(response)
    }

    /// GET a JSON resource. A 404 yields `Ok(None)`.
    fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Option<T>> {
        let response = self.send(path, params)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).map(Some)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(Error::Tracker {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json()?)
}

impl Tracker for JiraClient {
    fn search(&self, query: &Query) -> Result<Vec<Issue>> {
        let mut params = vec![
            ("jql", query.jql.clone()),
            ("maxResults", query.max_results.to_string()),
        ];
        if !query.fields.is_empty() {
            params.push(("fields", query.fields.join(",")));
        }
        if query.changelog {
            params.push(("expand", "changelog".to_string()));
        }

        let found: SearchResponse = self.get("search", &params)?;
        Ok(found.issues.into_iter().map(Issue::from).collect())
    }

    fn worklogs(&self, key: &str) -> Result<Vec<WorklogEntry>> {
        let page: WorklogPage = self.get(&format!("issue/{}/worklog", key), &[])?;
        Ok(page.into_entries())
    }

    fn issue(&self, key: &str) -> Result<Option<Issue>> {
        let found: Option<IssueDto> = self.get_optional(
            &format!("issue/{}", key),
            &[("fields", LOOKUP_FIELDS.to_string())],
        )?;
        Ok(found.map(Issue::from))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<IssueDto>,
}

#[derive(Debug, Deserialize)]
struct IssueDto {
    key: String,
    #[serde(default)]
    fields: FieldsDto,
    #[serde(default)]
    changelog: Option<ChangelogDto>,
}

#[derive(Debug, Default, Deserialize)]
struct FieldsDto {
    #[serde(default)]
    summary: String,
    assignee: Option<UserDto>,
    reporter: Option<UserDto>,
    status: Option<NamedDto>,
    issuetype: Option<NamedDto>,
    priority: Option<NamedDto>,
    worklog: Option<WorklogPage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    name: Option<String>,
    email_address: Option<String>,
    account_id: Option<String>,
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NamedDto {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ChangelogDto {
    #[serde(default)]
    histories: Vec<HistoryDto>,
}

#[derive(Debug, Deserialize)]
struct HistoryDto {
    created: String,
    #[serde(default)]
    items: Vec<ItemDto>,
}

#[derive(Debug, Deserialize)]
struct ItemDto {
    field: String,
    #[serde(rename = "fromString")]
    from_value: Option<String>,
    #[serde(rename = "toString")]
    to_value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WorklogPage {
    #[serde(default)]
    worklogs: Vec<WorklogDto>,
}

impl WorklogPage {
    fn into_entries(self) -> Vec<WorklogEntry> {
        self.worklogs
            .into_iter()
            .map(WorklogEntry::from)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorklogDto {
    update_author: Option<UserDto>,
    author: Option<UserDto>,
    started: String,
    #[serde(default)]
    time_spent: String,
    comment: Option<String>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        // Server installs identify users by name, cloud ones by account id
        let name = dto
            .name
            .or(dto.email_address)
            .or(dto.account_id)
            .unwrap_or_default();
        let display_name = dto.display_name.unwrap_or_else(|| name.clone());
        User { name, display_name }
    }
}

impl From<WorklogDto> for WorklogEntry {
    fn from(dto: WorklogDto) -> Self {
        let author = dto
            .update_author
            .or(dto.author)
            .map(User::from)
            .unwrap_or_else(|| User::new("", ""));
        WorklogEntry {
            author,
            started: dto.started,
            time_spent: dto.time_spent,
            comment: dto.comment,
        }
    }
}

impl From<HistoryDto> for HistoryBatch {
    fn from(dto: HistoryDto) -> Self {
        let items = dto
            .items
            .into_iter()
            .map(|item| ChangeItem {
                field: item.field,
                from: item.from_value,
                to: item.to_value,
            })
            .collect();
        HistoryBatch::new(dto.created, items)
    }
}

impl From<IssueDto> for Issue {
    fn from(dto: IssueDto) -> Self {
        let fields = dto.fields;
        let changelog = dto
            .changelog
            .map(|c| c.histories.into_iter().map(HistoryBatch::from).collect())
            .unwrap_or_default();
        let worklogs = fields
            .worklog
            .map(WorklogPage::into_entries)
            .unwrap_or_default();
        Issue {
            key: dto.key,
            summary: fields.summary,
            assignee: fields.assignee.map(User::from),
            reporter: fields.reporter.map(User::from),
            status: fields.status.map(|s| s.name),
            issue_type: fields.issuetype.map(|t| t.name),
            priority: fields.priority.map(|p| p.name),
            changelog,
            worklogs,
        }
    }
}

#[cfg(test)]
#[path = "jira_tests.rs"]
mod tests;
