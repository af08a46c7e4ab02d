// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `tally` with a clean environment: no config, secrets or log filter leak in.
pub fn tally() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env_remove("TALLY_CONFIG")
        .env_remove("TALLY_TRACKER_PASSWORD")
        .env_remove("TALLY_SMTP_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// A configuration whose tracker refuses connections, so no run can reach
/// a real server.
pub const OFFLINE_CONFIG: &str = r#"
[tracker]
url = "http://127.0.0.1:9"
user = "reporter"
password = "secret"
project = "TRG"

[smtp]
host = "127.0.0.1"
port = 9
user = "reporter@example.com"

[email]
from = "reporter@example.com"
to = "lead@example.com"
daily_subject = "Worklog for {}"
queue_subject = "Testing queue {}"
weekly_subject = "Testing {} - {}"

[[team]]
mail = "alice@example.com"
role = "manual"
"#;

/// Write `content` as `tally.toml` in a fresh temp directory.
pub fn config_dir(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tally.toml");
    std::fs::write(&path, content).unwrap();
    (temp, path)
}
