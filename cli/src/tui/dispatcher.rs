// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use almanac_core::{Category, ViewMode};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Moves the focused day by a number of days.
    MoveFocus(i64),
    /// Moves the focus between the days shown by the list view.
    MoveListFocus(isize),
    NextMonth,
    PreviousMonth,
    GoToToday,
    SetViewMode(ViewMode),
    ToggleViewMode,
    CycleFocusedEvent,

    OpenNewEvent,
    OpenFocusedDate,
    OpenFocusedEvent,

    UpdateTitle(String),
    UpdateDate(String),
    UpdateStart(String),
    UpdateEnd(String),
    UpdateDescription(String),
    UpdateCategory(Category),
    SubmitForm,
    DeleteEvent,
    CloseForm,

    CycleTheme,
    DismissToast,
}
