// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::path::Path;

use almanac_core::CalendarEvent;
use chrono::NaiveDate;

/// Asserts that an event has the expected title and date.
pub fn assert_event_matches(event: &CalendarEvent, title: &str, date: NaiveDate) {
    assert_eq!(event.title, title, "event title mismatch");
    assert_eq!(event.date, date, "event date mismatch");
    assert!(!event.id.is_empty(), "event id should not be empty");
}

/// Asserts that a file exists at the given path.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "file should exist: {}", path.display());
}
