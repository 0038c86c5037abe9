// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use almanac_core::{KeyValueStore, ViewMode};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::header::Header;
use crate::tui::month_grid::MonthGrid;
use crate::tui::month_list::MonthList;

/// The main screen: header plus the grid or list of the displayed month.
pub fn calendar_view<K: KeyValueStore>() -> SinglePage<CalendarStore<K>, CalendarBody> {
    SinglePage::new("Almanac", CalendarBody).with_instructions(vec![
        ("Move", "<←↓↑→>"),
        ("Month", "<n/p>"),
        ("Today", "<t>"),
        ("View", "<v>"),
        ("New", "<a>"),
        ("Edit", "<e>"),
        ("Theme", "<T>"),
        ("Quit", "<q>"),
    ])
}

pub struct CalendarBody;

impl<K: KeyValueStore> Component<CalendarStore<K>> for CalendarBody {
    fn render(&self, store: &RefCell<CalendarStore<K>>, area: Rect, buf: &mut Buffer) {
        let [header, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .horizontal_margin(1)
        .areas(area);

        Header.render(store, header, buf);
        let mode = store.borrow().calendar.view_mode();
        match mode {
            ViewMode::Grid => MonthGrid.render(store, body, buf),
            ViewMode::List => MonthList.render(store, body, buf),
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore<K>>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let mode = store.borrow().calendar.view_mode();
        let action = match (event.code, mode) {
            (KeyCode::Left | KeyCode::Char('h'), ViewMode::Grid) => Action::MoveFocus(-1),
            (KeyCode::Right | KeyCode::Char('l'), ViewMode::Grid) => Action::MoveFocus(1),
            (KeyCode::Up | KeyCode::Char('k'), ViewMode::Grid) => Action::MoveFocus(-7),
            (KeyCode::Down | KeyCode::Char('j'), ViewMode::Grid) => Action::MoveFocus(7),
            (KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k'), ViewMode::List) => {
                Action::MoveListFocus(-1)
            }
            (KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j'), ViewMode::List) => {
                Action::MoveListFocus(1)
            }
            (KeyCode::Char('n') | KeyCode::PageDown, _) => Action::NextMonth,
            (KeyCode::Char('p') | KeyCode::PageUp, _) => Action::PreviousMonth,
            (KeyCode::Char('t'), _) => Action::GoToToday,
            (KeyCode::Char('v'), _) => Action::ToggleViewMode,
            (KeyCode::Char('g'), _) => Action::SetViewMode(ViewMode::Grid),
            (KeyCode::Char('L'), _) => Action::SetViewMode(ViewMode::List),
            (KeyCode::Char('a'), _) => Action::OpenNewEvent,
            (KeyCode::Enter, _) => Action::OpenFocusedDate,
            (KeyCode::Tab, _) => Action::CycleFocusedEvent,
            (KeyCode::Char('e'), _) => Action::OpenFocusedEvent,
            (KeyCode::Char('T'), _) => Action::CycleTheme,
            (KeyCode::Char('x'), _) => Action::DismissToast,
            (KeyCode::Char('q'), _) => return Some(Message::Exit),
            _ => return None,
        };

        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}
