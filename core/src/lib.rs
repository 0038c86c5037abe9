// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core library of Almanac: the event model, storage, view derivation and
//! the calendar controller that ties them together.

mod calendar;
mod config;
mod datetime;
mod event;
mod form;
mod storage;
mod theme;
mod toast;
mod view;

pub use crate::calendar::{Calendar, ViewState};
pub use crate::config::{APP_NAME, Config, ConfigDuration, TimeFormat, WeekStart};
pub use crate::datetime::{
    STABLE_FORMAT_DATE, STABLE_FORMAT_MONTH, STABLE_FORMAT_TIME, add_months, end_of_month,
    format_time, parse_date, parse_month, parse_time, start_of_month,
};
pub use crate::event::{CalendarEvent, Category};
pub use crate::form::{EventForm, FormDefaults, FormError, FormField, FormMode, Submission};
pub use crate::storage::{
    EVENTS_KEY, FileStore, KeyValueStore, MemoryStore, Storage, StorageError, THEME_KEY,
};
pub use crate::theme::Theme;
pub use crate::toast::{
    DEFAULT_TOAST_DURATION, MAX_TOAST_DURATION, Toast, ToastKind, ToastQueue,
};
pub use crate::view::{
    CalendarDay, GRID_MAX_VISIBLE, ViewMode, events_in_month, events_on_date, grid_days,
    list_days, month_grid_dates, month_list_dates, visible_and_hidden,
};
