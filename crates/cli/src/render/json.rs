// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tally_core::{DailyScope, QueueScope, WeeklyScope};

use super::Renderer;
use crate::error::Result;

/// Pretty-printed scope JSON, for inspecting a report without a layout.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_daily(&self, scope: &DailyScope) -> Result<String> {
        Ok(serde_json::to_string_pretty(scope)?)
    }

    fn render_queue(&self, scope: &QueueScope) -> Result<String> {
        Ok(serde_json::to_string_pretty(scope)?)
    }

    fn render_weekly(&self, scope: &WeeklyScope) -> Result<String> {
        Ok(serde_json::to_string_pretty(scope)?)
    }
}
