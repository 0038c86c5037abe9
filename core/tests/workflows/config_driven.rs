// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven workflow tests.

use std::time::{Duration, Instant};

use almanac_core::{
    Calendar, Category, Config, MAX_TOAST_DURATION, MemoryStore, Storage, ViewMode, WeekStart,
};
use chrono::Datelike;

use crate::common::date;

#[derive(Debug, serde::Deserialize)]
struct ConfigFile {
    core: Config,
}

fn parse(text: &str) -> Config {
    let mut config = toml::from_str::<ConfigFile>(text).unwrap().core;
    config.normalize().unwrap();
    config
}

#[test]
fn config_driven_preferences_apply_to_calendar() {
    let config = parse(
        r#"
        [core]
        state_dir = "/tmp/almanac-test"
        default_view = "list"
        week_start = "monday"
        toast_duration = "1500ms"
        default_start = "08:30"
        default_end = "08:45"
        default_category = "important"
        "#,
    );
    assert_eq!(config.toast_duration(), Duration::from_millis(1500));

    let mut calendar = Calendar::open(Storage::new(MemoryStore::new()), date(2024, 3, 2), &config);
    assert_eq!(calendar.view_mode(), ViewMode::List);
    assert_eq!(calendar.week_start(), WeekStart::Monday);

    let days = calendar.grid_days(date(2024, 3, 2));
    assert_eq!(days[0].date.weekday(), chrono::Weekday::Mon);

    calendar.open_new_event(date(2024, 3, 2));
    let form = calendar.form().unwrap();
    assert_eq!(form.start_time, "08:30");
    assert_eq!(form.end_time, "08:45");
    assert_eq!(form.category, Category::Important);
}

#[test]
fn config_driven_defaults_when_section_is_empty() {
    let config = parse("[core]\nstate_dir = \"/tmp/almanac-test\"\n");
    assert_eq!(config.default_view, ViewMode::Grid);
    assert_eq!(config.week_start, WeekStart::Sunday);
    assert_eq!(config.default_start, "09:00");
    assert_eq!(config.default_category, Category::Personal);

    let calendar = Calendar::open(Storage::new(MemoryStore::new()), date(2024, 3, 2), &config);
    let days = calendar.grid_days(date(2024, 3, 2));
    assert_eq!(days[0].date, date(2024, 2, 25));
    assert_eq!(days.len() % 7, 0);
}

#[test]
fn config_driven_rejects_bad_duration() {
    let result = toml::from_str::<ConfigFile>("[core]\ntoast_duration = \"soon\"\n");
    assert!(result.is_err());
}

#[test]
fn config_driven_colon_duration_is_hours_and_minutes() {
    let config = parse("[core]\nstate_dir = \"/tmp/almanac-test\"\ntoast_duration = \"00:04\"\n");
    assert_eq!(config.toast_duration(), Duration::from_secs(240));
}

#[test]
fn config_driven_rejects_overflowing_duration() {
    let text = "[core]\ntoast_duration = \"18446744073709551615h\"\n";
    assert!(toml::from_str::<ConfigFile>(text).is_err());
}

#[test]
fn config_driven_huge_duration_does_not_panic_on_toast() {
    let config = parse(
        "[core]\nstate_dir = \"/tmp/almanac-test\"\ntoast_duration = \"18446744073709551615s\"\n",
    );
    let mut calendar = Calendar::open(Storage::new(MemoryStore::new()), date(2024, 3, 2), &config);
    let now = Instant::now();
    calendar.cycle_theme(now);
    let deadline = calendar.toasts().iter().last().unwrap().deadline;
    assert_eq!(deadline, now + MAX_TOAST_DURATION);
}
