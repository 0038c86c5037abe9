// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Pure derivations from (anchor date, events) to the per-day buckets shown by
//! the grid and list views. Everything here is recomputed on every frame.

use std::{fmt::Display, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::WeekStart;
use crate::datetime::{end_of_month, end_of_week, start_of_month, start_of_week};
use crate::event::CalendarEvent;

/// Maximum number of events drawn inside a grid cell before "+N more".
pub const GRID_MAX_VISIBLE: usize = 3;

/// How the month is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Month calendar grid.
    #[default]
    Grid,

    /// Chronological agenda.
    List,
}

const VIEW_GRID: &str = "grid";
const VIEW_LIST: &str = "list";

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

impl AsRef<str> for ViewMode {
    fn as_ref(&self) -> &str {
        match self {
            ViewMode::Grid => VIEW_GRID,
            ViewMode::List => VIEW_LIST,
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ViewMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            VIEW_GRID => Ok(ViewMode::Grid),
            VIEW_LIST => Ok(ViewMode::List),
            _ => Err(()),
        }
    }
}

/// A single day as presented by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub events: Vec<&'a CalendarEvent>,
}

/// Events whose date equals `date`, in their original relative order.
/// Time-of-day fields are ignored.
pub fn events_on_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| e.date == date).collect()
}

/// Dates of the complete weeks covering the anchor's month. The length is
/// always a multiple of 7.
pub fn month_grid_dates(anchor: NaiveDate, week_start: WeekStart) -> Vec<NaiveDate> {
    let first = start_of_week(start_of_month(anchor), week_start);
    let last = end_of_week(end_of_month(anchor), week_start);
    days_between(first, last)
}

/// Dates within the anchor's month only.
pub fn month_list_dates(anchor: NaiveDate) -> Vec<NaiveDate> {
    days_between(start_of_month(anchor), end_of_month(anchor))
}

/// Grid cells for the anchor's month, including leading and trailing days
/// of adjacent months.
pub fn grid_days<'a>(
    anchor: NaiveDate,
    today: NaiveDate,
    events: &'a [CalendarEvent],
    week_start: WeekStart,
) -> Vec<CalendarDay<'a>> {
    month_grid_dates(anchor, week_start)
        .into_iter()
        .map(|date| CalendarDay {
            date,
            is_current_month: same_month(date, anchor),
            is_today: date == today,
            events: events_on_date(events, date),
        })
        .collect()
}

/// Agenda sections for the anchor's month: days that have events, plus
/// today. Events inside a day are ordered by start time.
pub fn list_days<'a>(
    anchor: NaiveDate,
    today: NaiveDate,
    events: &'a [CalendarEvent],
) -> Vec<CalendarDay<'a>> {
    month_list_dates(anchor)
        .into_iter()
        .filter_map(|date| {
            let mut day_events = events_on_date(events, date);
            let is_today = date == today;
            if day_events.is_empty() && !is_today {
                return None;
            }

            day_events.sort_by(|a, b| a.start_time.cmp(&b.start_time));
            Some(CalendarDay {
                date,
                is_current_month: true,
                is_today,
                events: day_events,
            })
        })
        .collect()
}

/// Number of events falling in the anchor's month.
pub fn events_in_month(anchor: NaiveDate, events: &[CalendarEvent]) -> usize {
    events.iter().filter(|e| same_month(e.date, anchor)).count()
}

/// Splits a day's events into the drawn prefix and the count of hidden ones.
pub fn visible_and_hidden<'s, 'a>(
    events: &'s [&'a CalendarEvent],
    max: usize,
) -> (&'s [&'a CalendarEvent], usize) {
    let shown = events.len().min(max);
    (&events[..shown], events.len() - shown)
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

fn days_between(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    first.iter_days().take_while(|d| *d <= last).collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: &str, on: NaiveDate, start: &str) -> CalendarEvent {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        CalendarEvent {
            id: id.to_string(),
            title: id.to_string(),
            date: on,
            start_time: start.to_string(),
            end_time: "23:00".to_string(),
            description: None,
            category: None,
            color: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn events_on_date_matches_day_only() {
        let events = vec![
            event("A", date(2024, 3, 5), "18:00"),
            event("B", date(2024, 3, 5), "07:00"),
            event("C", date(2024, 3, 6), "07:00"),
        ];

        let titles: Vec<_> = events_on_date(&events, date(2024, 3, 5))
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, ["A", "B"]);
        assert!(events_on_date(&events, date(2024, 3, 7)).is_empty());
    }

    #[test]
    fn grid_covers_whole_weeks() {
        for week_start in [WeekStart::Sunday, WeekStart::Monday] {
            for year in [2023, 2024, 2026] {
                for month in 1..=12 {
                    let anchor = date(year, month, 15);
                    let dates = month_grid_dates(anchor, week_start);
                    assert_eq!(dates.len() % 7, 0, "{anchor} {week_start:?}");
                    for d in month_list_dates(anchor) {
                        assert!(dates.contains(&d), "{d} missing from grid");
                    }
                    let labels = week_start.labels();
                    assert_eq!(dates[0].weekday().to_string(), labels[0]);
                }
            }
        }
    }

    #[test]
    fn grid_for_march_2024() {
        // 2024-03-01 is a Friday, 2024-03-31 a Sunday
        let dates = month_grid_dates(date(2024, 3, 20), WeekStart::Sunday);
        assert_eq!(dates.first(), Some(&date(2024, 2, 25)));
        assert_eq!(dates.last(), Some(&date(2024, 4, 6)));
        assert_eq!(dates.len(), 42);

        // a February starting on the week start fits in four rows
        let dates = month_grid_dates(date(2026, 2, 1), WeekStart::Sunday);
        assert_eq!(dates.len(), 28);
    }

    #[test]
    fn list_dates_are_exactly_the_month() {
        let dates = month_list_dates(date(2024, 2, 10));
        assert_eq!(dates.len(), 29);
        assert_eq!(dates[0], date(2024, 2, 1));
        assert_eq!(dates[28], date(2024, 2, 29));
    }

    #[test]
    fn grid_days_flag_month_and_today() {
        let events = vec![event("A", date(2024, 2, 29), "09:00")];
        let days = grid_days(date(2024, 3, 1), date(2024, 3, 2), &events, WeekStart::Sunday);

        let leap = days.iter().find(|d| d.date == date(2024, 2, 29)).unwrap();
        assert!(!leap.is_current_month);
        assert_eq!(leap.events.len(), 1);

        let today = days.iter().find(|d| d.is_today).unwrap();
        assert_eq!(today.date, date(2024, 3, 2));
        assert!(today.is_current_month);
    }

    #[test]
    fn list_days_keep_today_and_sort_by_start() {
        let events = vec![
            event("late", date(2024, 3, 5), "18:00"),
            event("early", date(2024, 3, 5), "07:30"),
            event("other", date(2024, 4, 5), "07:30"),
        ];
        let days = list_days(date(2024, 3, 1), date(2024, 3, 10), &events);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date(2024, 3, 5));
        let titles: Vec<_> = days[0].events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["early", "late"]);
        assert!(days[1].is_today);
        assert!(days[1].events.is_empty());
    }

    #[test]
    fn counts_events_in_month() {
        let events = vec![
            event("a", date(2024, 3, 1), "09:00"),
            event("b", date(2024, 3, 31), "09:00"),
            event("c", date(2023, 3, 31), "09:00"),
        ];
        assert_eq!(events_in_month(date(2024, 3, 15), &events), 2);
    }

    #[test]
    fn splits_visible_and_hidden() {
        let events: Vec<_> = (0..5)
            .map(|i| event(&i.to_string(), date(2024, 3, 1), "09:00"))
            .collect();
        let refs: Vec<_> = events.iter().collect();

        let (shown, hidden) = visible_and_hidden(&refs, GRID_MAX_VISIBLE);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 2);

        let (shown, hidden) = visible_and_hidden(&refs[..2], GRID_MAX_VISIBLE);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 0);
    }
}
