// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Team roster and member roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How a team member tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manual testing; these members' work feeds the reports.
    Manual,
    /// Test automation.
    #[serde(alias = "automatic")]
    Auto,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manual => "manual",
            Role::Auto => "auto",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(Role::Manual),
            "auto" | "automatic" => Ok(Role::Auto),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

/// A team member as listed in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Tracker identity (login or e-mail).
    pub mail: String,
    pub role: Role,
}

/// Immutable team roster, built once from configuration and passed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new(members: Vec<Member>) -> Self {
        Roster { members }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Every member's identity.
    pub fn all(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.mail.as_str()).collect()
    }

    /// Identities of manual testers.
    pub fn manual(&self) -> Vec<&str> {
        self.with_role(Role::Manual)
    }

    /// Identities of automation engineers.
    pub fn automatic(&self) -> Vec<&str> {
        self.with_role(Role::Auto)
    }

    fn with_role(&self, role: Role) -> Vec<&str> {
        self.members
            .iter()
            .filter(|m| m.role == role)
            .map(|m| m.mail.as_str())
            .collect()
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
