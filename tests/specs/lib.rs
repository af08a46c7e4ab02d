// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `tally` binary.
//!
//! The scenarios live under `cli/` and run as the `specs` test target of the
//! `tally` crate, which builds the binary they drive.
