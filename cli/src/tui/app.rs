// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::{Duration, Instant};
use std::{cell::RefCell, error::Error, rc::Rc};

use almanac_core::{Calendar, KeyValueStore, TimeFormat};
use chrono::{Local, NaiveDate};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Clear;
use ratatui::DefaultTerminal;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::calendar_view::{CalendarBody, calendar_view};
use crate::tui::component::{Component, Message};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::Dispatcher;
use crate::tui::event_editor::EventEditor;
use crate::tui::toast_overlay::ToastOverlay;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Runs the interactive calendar until the user quits, then hands the
/// calendar back.
pub fn run_calendar<K: KeyValueStore + 'static>(
    calendar: Calendar<K>,
    today: NaiveDate,
    time_format: TimeFormat,
) -> Result<Calendar<K>, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(CalendarStore::new(calendar, today, time_format)));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        CalendarStore::register_to(store.clone(), &mut dispatcher);
        let mut app = App::new(dispatcher);

        loop {
            app.tick(&store);
            if let Err(e) = app.draw(&store, &mut terminal) {
                break Err(e);
            }

            match app.read_event(&store) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // render the next frame
            }
        }
    }; // release dispatcher and views here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store.into_calendar())
}

struct App<K: KeyValueStore> {
    dispatcher: Dispatcher,
    view: SinglePage<CalendarStore<K>, CalendarBody>,
    editor: Option<EventEditor<K>>,
    area: Rect,
}

impl<K: KeyValueStore + 'static> App<K> {
    fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            view: calendar_view(),
            editor: None,
            area: Rect::default(),
        }
    }

    fn tick(&mut self, store: &RefCell<CalendarStore<K>>) {
        let mut store = store.borrow_mut();
        store.today = Local::now().date_naive();
        store.calendar.toasts_mut().prune(Instant::now());
    }

    fn draw(
        &mut self,
        store: &RefCell<CalendarStore<K>>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        let palette = store.borrow().palette();
        let completed = terminal.draw(|frame| {
            let area = frame.area();
            frame.buffer_mut().set_style(area, palette.base());
            self.view.render(store, area, frame.buffer_mut());

            if let Some(editor) = &self.editor {
                let rect = editor.area(area);
                Clear.render(rect, frame.buffer_mut());
                frame.buffer_mut().set_style(rect, palette.base());
                editor.render(store, rect, frame.buffer_mut());
                if let Some((x, y)) = editor.get_cursor_position(store, rect) {
                    frame.set_cursor_position(Position::new(x, y));
                }
            }

            let toasts = area.inner(Margin::new(1, 1));
            ToastOverlay.render(store, toasts, frame.buffer_mut());
        })?;
        self.area = completed.area;
        Ok(())
    }

    fn read_event(
        &mut self,
        store: &RefCell<CalendarStore<K>>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        if !event::poll(TICK_RATE)? {
            return Ok(None);
        }

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(..) => return Ok(Some(Message::Handled)),
            _ => return Ok(None),
        };

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Message::Exit));
        }

        let msg = match &mut self.editor {
            Some(editor) => {
                let rect = editor.area(self.area);
                editor.on_key(&mut self.dispatcher, store, rect, key)
            }
            None => self.view.on_key(&mut self.dispatcher, store, self.area, key),
        };
        self.sync_editor(store);
        Ok(msg)
    }

    /// Opens or drops the editor to follow the form held by the calendar.
    fn sync_editor(&mut self, store: &RefCell<CalendarStore<K>>) {
        let form = store.borrow().calendar.form().map(|f| f.is_edit());
        match (form, self.editor.is_some()) {
            (Some(is_edit), false) => {
                let mut editor = EventEditor::new(is_edit);
                editor.activate(&mut self.dispatcher, store);
                self.editor = Some(editor);
            }
            (None, true) => self.editor = None,
            _ => {}
        }
    }
}
