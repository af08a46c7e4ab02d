// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! A [`Renderer`] turns an assembled scope into the mail body. The built-in
//! [`HtmlRenderer`] carries one layout per report kind; [`JsonRenderer`]
//! dumps the scope itself for dry runs.

pub mod filters;
mod html;
mod json;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

use tally_core::{DailyScope, QueueScope, Scope, WeeklyScope};

use crate::error::Result;

/// Scope-to-HTML rendering, one method per report template.
pub trait Renderer {
    fn render_daily(&self, scope: &DailyScope) -> Result<String>;

    fn render_queue(&self, scope: &QueueScope) -> Result<String>;

    fn render_weekly(&self, scope: &WeeklyScope) -> Result<String>;

    /// Dispatch on the scope's report kind.
    fn render(&self, scope: &Scope) -> Result<String> {
        match scope {
            Scope::Daily(scope) => self.render_daily(scope),
            Scope::Queue(scope) => self.render_queue(scope),
            Scope::Weekly(scope) => self.render_weekly(scope),
        }
    }
}
