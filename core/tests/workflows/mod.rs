// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the almanac-core crate.
//!
//! These tests drive the calendar through multi-step scenarios on top of a
//! file-backed store and check what a fresh load sees.

mod config_driven;
mod event_lifecycle;
mod persistence;
