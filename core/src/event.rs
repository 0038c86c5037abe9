// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event as stored on disk.
///
/// Start and end times are kept as the `HH:MM` strings the user typed; their
/// ordering is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// The unique identifier for the event.
    pub id: String,

    /// The title of the event, never empty.
    pub title: String,

    /// The calendar day of the event.
    pub date: NaiveDate,

    /// Start time of day, `HH:MM`.
    pub start_time: String,

    /// End time of day, `HH:MM`.
    pub end_time: String,

    /// The description of the event, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The category of the event, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Display color override, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// When the event was created.
    pub created_at: DateTime<Utc>,

    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// The category used for display, events without one are treated as personal.
    pub fn effective_category(&self) -> Category {
        self.category.unwrap_or_default()
    }
}

/// The category of an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Work related.
    Work,

    /// Personal, the default.
    #[default]
    Personal,

    /// Marked as important.
    Important,
}

const CATEGORY_WORK: &str = "work";
const CATEGORY_PERSONAL: &str = "personal";
const CATEGORY_IMPORTANT: &str = "important";

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Important];

    /// The next category in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Category::Work => Category::Personal,
            Category::Personal => Category::Important,
            Category::Important => Category::Work,
        }
    }

    /// The previous category in display order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Category::Work => Category::Important,
            Category::Personal => Category::Work,
            Category::Important => Category::Personal,
        }
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        match self {
            Category::Work => CATEGORY_WORK,
            Category::Personal => CATEGORY_PERSONAL,
            Category::Important => CATEGORY_IMPORTANT,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            CATEGORY_WORK => Ok(Category::Work),
            CATEGORY_PERSONAL => Ok(Category::Personal),
            CATEGORY_IMPORTANT => Ok(Category::Important),
            _ => Err(()),
        }
    }
}
