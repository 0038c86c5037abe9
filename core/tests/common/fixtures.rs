// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;

use almanac_core::{CalendarEvent, Config};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Creates a test configuration storing state under `state_dir`.
#[must_use]
pub fn test_config(state_dir: &Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        ..Default::default()
    }
}

/// Shorthand for a valid calendar date.
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Shorthand for a UTC timestamp.
#[must_use]
pub fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .expect("valid test timestamp")
}

/// Creates a stored event with a fixed id derived from the title.
#[must_use]
pub fn test_event(title: &str, on: NaiveDate) -> CalendarEvent {
    let ts = utc(2024, 1, 1, 0);
    CalendarEvent {
        id: format!("id-{}", title.to_lowercase().replace(' ', "-")),
        title: title.to_string(),
        date: on,
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        description: None,
        category: None,
        color: None,
        created_at: ts,
        updated_at: ts,
    }
}
