// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Instant,
};

use almanac_core::{
    Calendar, CalendarEvent, GRID_MAX_VISIBLE, KeyValueStore, TimeFormat, ViewMode, add_months,
    events_on_date,
};
use chrono::{Days, NaiveDate, Utc};

use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::palette::Palette;

/// State shared by the TUI components: the calendar itself plus the cursor.
///
/// The focused date always lies in the displayed month.
#[derive(Debug)]
pub struct CalendarStore<K: KeyValueStore> {
    pub calendar: Calendar<K>,
    pub today: NaiveDate,
    pub focus: NaiveDate,
    /// Index into [`CalendarStore::focused_events`].
    pub focus_event: usize,
    pub time_format: TimeFormat,
    /// Events the grid draws in the focused cell, updated on render.
    pub grid_slots: Cell<usize>,
}

impl<K: KeyValueStore> CalendarStore<K> {
    pub fn new(mut calendar: Calendar<K>, today: NaiveDate, time_format: TimeFormat) -> Self {
        calendar.go_to_today(today);
        Self {
            calendar,
            today,
            focus: today,
            focus_event: 0,
            time_format,
            grid_slots: Cell::new(GRID_MAX_VISIBLE),
        }
    }

    pub fn into_calendar(self) -> Calendar<K> {
        self.calendar
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.calendar.theme())
    }

    /// Events of the focused day the current view shows, in its order.
    pub fn focused_events(&self) -> Vec<&CalendarEvent> {
        let mut events = events_on_date(self.calendar.events(), self.focus);
        match self.calendar.view_mode() {
            ViewMode::List => events.sort_by(|a, b| a.start_time.cmp(&b.start_time)),
            ViewMode::Grid => events.truncate(self.grid_slots.get()),
        }
        events
    }

    pub fn focused_event(&self) -> Option<&CalendarEvent> {
        self.focused_events().get(self.focus_event).copied()
    }

    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::MoveFocus(days) => {
                let date = match *days >= 0 {
                    true => self.focus.checked_add_days(Days::new(days.unsigned_abs())),
                    false => self.focus.checked_sub_days(Days::new(days.unsigned_abs())),
                };
                if let Some(date) = date {
                    self.set_focus(date);
                }
            }
            Action::MoveListFocus(offset) => self.move_list_focus(*offset),
            Action::NextMonth => {
                self.calendar.next_month();
                self.set_focus(add_months(self.focus, 1));
            }
            Action::PreviousMonth => {
                self.calendar.previous_month();
                self.set_focus(add_months(self.focus, -1));
            }
            Action::GoToToday => {
                self.calendar.go_to_today(self.today);
                self.set_focus(self.today);
            }
            Action::SetViewMode(mode) => {
                self.calendar.set_view_mode(*mode);
                self.focus_event = 0;
            }
            Action::ToggleViewMode => {
                self.calendar.toggle_view_mode();
                self.focus_event = 0;
            }
            Action::CycleFocusedEvent => {
                let len = self.focused_events().len();
                self.focus_event = match len {
                    0 => 0,
                    _ => (self.focus_event + 1) % len,
                };
            }

            Action::OpenNewEvent => self.calendar.open_new_event(self.today),
            Action::OpenFocusedDate => self.calendar.open_date(self.focus),
            Action::OpenFocusedEvent => {
                if let Some(id) = self.focused_event().map(|e| e.id.clone()) {
                    self.calendar.open_event(&id);
                }
            }

            Action::UpdateTitle(v) => self.update_form(|f| f.set_title(v.clone())),
            Action::UpdateDate(v) => self.update_form(|f| f.set_date(v.clone())),
            Action::UpdateStart(v) => self.update_form(|f| f.set_start_time(v.clone())),
            Action::UpdateEnd(v) => self.update_form(|f| f.set_end_time(v.clone())),
            Action::UpdateDescription(v) => self.update_form(|f| f.set_description(v.clone())),
            Action::UpdateCategory(v) => self.update_form(|f| f.set_category(*v)),
            Action::SubmitForm => {
                if let Some(submission) = self.calendar.submit_form(Utc::now(), Instant::now()) {
                    let date = submission.event().date;
                    let id = submission.event().id.clone();
                    self.set_focus(date);
                    self.focus_event = self
                        .focused_events()
                        .iter()
                        .position(|e| e.id == id)
                        .unwrap_or(0);
                }
            }
            Action::DeleteEvent => {
                if self.calendar.delete_selected(Instant::now()) {
                    self.focus_event = 0;
                }
            }
            Action::CloseForm => self.calendar.close_form(),

            Action::CycleTheme => {
                self.calendar.cycle_theme(Instant::now());
            }
            Action::DismissToast => {
                self.calendar.toasts_mut().dismiss_latest();
            }
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher)
    where
        K: 'static,
    {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().apply(action);
        }));
        dispatcher.register(callback);
    }

    fn set_focus(&mut self, date: NaiveDate) {
        self.focus = date;
        self.focus_event = 0;
        self.calendar.set_anchor(date);
    }

    /// Steps through the days listed by the agenda, staying inside the month.
    fn move_list_focus(&mut self, offset: isize) {
        let dates: Vec<NaiveDate> = self
            .calendar
            .list_days(self.today)
            .iter()
            .map(|d| d.date)
            .collect();
        if dates.is_empty() {
            return;
        }

        let target = match dates.iter().position(|d| *d == self.focus) {
            Some(i) => i.saturating_add_signed(offset).min(dates.len() - 1),
            None if offset >= 0 => match dates.iter().position(|d| *d > self.focus) {
                Some(i) => i,
                None => dates.len() - 1,
            },
            None => dates.iter().rposition(|d| *d < self.focus).unwrap_or(0),
        };
        self.set_focus(dates[target]);
    }

    fn update_form(&mut self, f: impl FnOnce(&mut almanac_core::EventForm)) {
        match self.calendar.form_mut() {
            Some(form) => f(form),
            None => tracing::debug!("no open form to update"),
        }
    }
}
