// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    invalid_date = { Error::InvalidDate { value: "2024-13-01".into() }, "2024-13-01" },
    invalid_role = { Error::InvalidRole("boss".into()), "manual, auto" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_invalid_timestamp_display() {
    let err = Error::InvalidTimestamp {
        value: "yesterday".into(),
        reason: "input contains invalid characters".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("yesterday"));
    assert!(msg.contains("hint:"));
}
