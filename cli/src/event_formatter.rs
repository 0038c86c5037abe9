// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use almanac_core::{CalendarEvent, Category, STABLE_FORMAT_DATE, TimeFormat, format_time};
use colored::Color;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: ArgOutputFormat,
}

impl EventFormatter {
    pub fn new(time_format: TimeFormat) -> Self {
        Self {
            columns: vec![
                EventColumn::Date(EventColumnDate),
                EventColumn::TimeRange(EventColumnTimeRange { time_format }),
                EventColumn::Category(EventColumnCategory),
                EventColumn::Title(EventColumnTitle),
                EventColumn::Id(EventColumnId),
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [&'a CalendarEvent]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [&'a CalendarEvent],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), &self.formatter.columns, self.events)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), &self.formatter.columns, self.events)
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn {
    Category(EventColumnCategory),
    Date(EventColumnDate),
    Id(EventColumnId),
    TimeRange(EventColumnTimeRange),
    Title(EventColumnTitle),
}

impl<'e> TableColumn<&'e CalendarEvent> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Category(_) => "Category",
            EventColumn::Date(_) => "Date",
            EventColumn::Id(_) => "ID",
            EventColumn::TimeRange(_) => "Time Range",
            EventColumn::Title(_) => "Title",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a &'e CalendarEvent) -> Cow<'a, str> {
        match self {
            EventColumn::Category(a) => a.format(data),
            EventColumn::Date(a) => a.format(data),
            EventColumn::Id(a) => a.format(data),
            EventColumn::TimeRange(a) => a.format(data),
            EventColumn::Title(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::TimeRange(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &&'e CalendarEvent) -> Option<Color> {
        match self {
            EventColumn::Category(_) => Some(category_color(data.effective_category())),
            EventColumn::Id(_) => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Work => Color::Blue,
        Category::Personal => Color::Green,
        Category::Important => Color::Red,
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnCategory;

impl EventColumnCategory {
    fn format<'a>(&self, event: &'a CalendarEvent) -> Cow<'a, str> {
        event.effective_category().to_string().into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnDate;

impl EventColumnDate {
    fn format<'a>(&self, event: &'a CalendarEvent) -> Cow<'a, str> {
        event.date.format(STABLE_FORMAT_DATE).to_string().into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnId;

impl EventColumnId {
    fn format<'a>(&self, event: &'a CalendarEvent) -> Cow<'a, str> {
        event.id.as_str().into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnTimeRange {
    time_format: TimeFormat,
}

impl EventColumnTimeRange {
    fn format<'a>(&self, event: &'a CalendarEvent) -> Cow<'a, str> {
        format!(
            "{}~{}",
            format_time(&event.start_time, self.time_format),
            format_time(&event.end_time, self.time_format)
        )
        .into()
    }
}

#[derive(Debug, Clone)]
pub struct EventColumnTitle;

impl EventColumnTitle {
    fn format<'a>(&self, event: &'a CalendarEvent) -> Cow<'a, str> {
        event.title.as_str().into()
    }
}
