// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::{Config, WeekStart};
use crate::datetime::add_months;
use crate::event::CalendarEvent;
use crate::form::{EventForm, FormDefaults, FormError, Submission};
use crate::storage::{KeyValueStore, Storage, StorageError};
use crate::theme::Theme;
use crate::toast::ToastQueue;
use crate::view::{CalendarDay, ViewMode, events_in_month, grid_days, list_days};

/// Navigation and selection state, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Any date inside the displayed month.
    pub anchor: NaiveDate,
    pub mode: ViewMode,
    pub selected_date: Option<NaiveDate>,
    pub selected_event: Option<String>,
}

/// The calendar application state, owning the events and their storage.
///
/// Every mutation of the event collection is written back to the store
/// before the method returns.
#[derive(Debug)]
pub struct Calendar<S: KeyValueStore> {
    storage: Storage<S>,
    events: Vec<CalendarEvent>,
    view: ViewState,
    form: Option<EventForm>,
    toasts: ToastQueue,
    theme: Theme,
    defaults: FormDefaults,
    week_start: WeekStart,
}

impl<S: KeyValueStore> Calendar<S> {
    /// Loads events and theme from `storage` and shows the month of `today`.
    #[tracing::instrument(skip_all, fields(%today))]
    pub fn open(storage: Storage<S>, today: NaiveDate, config: &Config) -> Self {
        let events = storage.load_events();
        let theme = storage.load_theme();
        tracing::debug!(count = events.len(), %theme, "calendar opened");

        Self {
            storage,
            events,
            view: ViewState {
                anchor: today,
                mode: config.default_view,
                selected_date: None,
                selected_event: None,
            },
            form: None,
            toasts: ToastQueue::new(config.toast_duration()),
            theme,
            defaults: config.form_defaults(),
            week_start: config.week_start,
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn anchor(&self) -> NaiveDate {
        self.view.anchor
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view.mode
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn form(&self) -> Option<&EventForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EventForm> {
        self.form.as_mut()
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.view.selected_date
    }

    pub fn selected_event(&self) -> Option<&str> {
        self.view.selected_event.as_deref()
    }

    pub fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    /// Grid cells of the displayed month.
    pub fn grid_days(&self, today: NaiveDate) -> Vec<CalendarDay<'_>> {
        grid_days(self.view.anchor, today, &self.events, self.week_start)
    }

    /// Agenda sections of the displayed month.
    pub fn list_days(&self, today: NaiveDate) -> Vec<CalendarDay<'_>> {
        list_days(self.view.anchor, today, &self.events)
    }

    /// Number of events in the displayed month.
    pub fn month_event_count(&self) -> usize {
        events_in_month(self.view.anchor, &self.events)
    }

    pub fn next_month(&mut self) {
        self.view.anchor = add_months(self.view.anchor, 1);
    }

    pub fn previous_month(&mut self) {
        self.view.anchor = add_months(self.view.anchor, -1);
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.view.anchor = today;
    }

    /// Moves the anchor to `date`, e.g. when the cursor leaves the month.
    pub fn set_anchor(&mut self, date: NaiveDate) {
        self.view.anchor = date;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view.mode = self.view.mode.toggle();
    }

    /// Opens a blank form for the selected date, or `today` if none.
    pub fn open_new_event(&mut self, today: NaiveDate) {
        let date = self.view.selected_date.unwrap_or(today);
        self.form = Some(EventForm::create(date, &self.defaults));
    }

    /// Selects `date` and opens a blank form for it.
    pub fn open_date(&mut self, date: NaiveDate) {
        self.view.selected_date = Some(date);
        self.view.selected_event = None;
        self.form = Some(EventForm::create(date, &self.defaults));
    }

    /// Selects an event and opens it for editing. Returns `false` for an unknown id.
    pub fn open_event(&mut self, id: &str) -> bool {
        let Some(event) = self.event(id) else {
            tracing::warn!(id, "cannot open unknown event");
            return false;
        };

        let form = EventForm::edit(event);
        let date = event.date;
        self.view.selected_date = Some(date);
        self.view.selected_event = Some(id.to_string());
        self.form = Some(form);
        true
    }

    /// Closes the form and clears the selection.
    pub fn close_form(&mut self) {
        self.form = None;
        self.view.selected_date = None;
        self.view.selected_event = None;
    }

    /// Submits the open form. The event is committed and the form closed on
    /// success; on a rejected draft the form stays open.
    pub fn submit_form(&mut self, now: DateTime<Utc>, instant: Instant) -> Option<Submission> {
        let form = self.form.as_ref()?;
        let submission = match form.submit(now) {
            Ok(submission) => submission,
            Err(FormError::EmptyTitle) => return None,
            Err(e @ FormError::InvalidDate(_)) => {
                tracing::debug!(err = %e, "form rejected");
                self.toasts.warning(
                    "Invalid date",
                    Some("Use the YYYY-MM-DD format".to_string()),
                    instant,
                );
                return None;
            }
        };

        self.upsert(submission.event().clone());
        self.close_form();
        if self.persist_events(instant).is_ok() {
            let title = match submission {
                Submission::Created(_) => "Event created",
                Submission::Updated(_) => "Event updated",
            };
            self.toasts.success(title, instant);
        }
        Some(submission)
    }

    /// Inserts or replaces an event by id and persists the collection.
    pub fn save_event(
        &mut self,
        event: CalendarEvent,
        instant: Instant,
    ) -> Result<(), StorageError> {
        self.upsert(event);
        self.persist_events(instant)
    }

    /// Deletes the event bound to the open form, if it is in edit mode.
    pub fn delete_selected(&mut self, instant: Instant) -> bool {
        let Some(id) = self.form.as_ref().and_then(EventForm::delete_request) else {
            return false;
        };

        let removed = self.remove(&id);
        self.close_form();
        if removed && self.persist_events(instant).is_ok() {
            self.toasts.success("Event deleted", instant);
        }
        removed
    }

    /// Removes exactly the event with `id`. Returns whether it existed.
    pub fn delete_event(&mut self, id: &str, instant: Instant) -> Result<bool, StorageError> {
        if !self.remove(id) {
            return Ok(false);
        }
        self.persist_events(instant)?;
        Ok(true)
    }

    /// Updates and persists the theme.
    pub fn set_theme(&mut self, theme: Theme, instant: Instant) -> Result<(), StorageError> {
        self.theme = theme;
        self.storage.save_theme(theme).inspect_err(|e| {
            tracing::error!(err = %e, "failed to save theme");
            self.toasts.error("Failed to save theme", Some(e.to_string()), instant);
        })
    }

    /// Switches to the next theme, failures only surface as a toast.
    pub fn cycle_theme(&mut self, instant: Instant) -> Theme {
        let theme = self.theme.next();
        if self.set_theme(theme, instant).is_ok() {
            self.toasts.info(format!("Theme: {theme}"), instant);
        }
        theme
    }

    fn upsert(&mut self, event: CalendarEvent) {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => *slot = event,
            None => self.events.push(event),
        }
    }

    fn remove(&mut self, id: &str) -> bool {
        let len = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != len
    }

    fn persist_events(&mut self, instant: Instant) -> Result<(), StorageError> {
        self.storage.save_events(&self.events).inspect_err(|e| {
            tracing::error!(err = %e, "failed to save events");
            self.toasts.error("Failed to save events", Some(e.to_string()), instant);
        })
    }
}
