// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveTime};

use crate::config::{TimeFormat, WeekStart};

/// NOTE: Used for storing on disk, so it should be stable across different runs.
pub const STABLE_FORMAT_DATE: &str = "%Y-%m-%d";
pub const STABLE_FORMAT_TIME: &str = "%H:%M";
pub const STABLE_FORMAT_MONTH: &str = "%Y-%m";

/// The first day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// The last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    match start_of_month(date).checked_add_months(Months::new(1)) {
        Some(next) => next - Duration::days(1),
        None => NaiveDate::MAX,
    }
}

/// Shift `date` by `months`, clamping the day to the end of the target month.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// The first day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let offset = match week_start {
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        WeekStart::Monday => date.weekday().num_days_from_monday(),
    };
    date - Duration::days(offset as i64)
}

/// The last day of the week containing `date`.
pub fn end_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    start_of_week(date, week_start) + Duration::days(6)
}

/// Parse a `YYYY-MM-DD` date, surrounding whitespace is ignored.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), STABLE_FORMAT_DATE).ok()
}

/// Parse a `YYYY-MM` month into its first day.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    parse_date(&format!("{}-01", s.trim()))
}

/// Parse a `HH:MM` time of day.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), STABLE_FORMAT_TIME).ok()
}

/// Format a stored `HH:MM` string for display. Unparsable input is returned unchanged.
pub fn format_time(s: &str, format: TimeFormat) -> String {
    match (format, parse_time(s)) {
        (TimeFormat::H12, Some(t)) => t.format("%-I:%M %p").to_string(),
        (TimeFormat::H24, Some(t)) => t.format(STABLE_FORMAT_TIME).to_string(),
        (_, None) => s.to_string(),
    }
}
