// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use almanac_core::{Category, FormField, KeyValueStore};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, FormItem, Input, RadioGroup};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};

type Store<K> = CalendarStore<K>;
type Items<K> = Box<dyn FormItem<Store<K>>>;

/// The modal event form, bound to the form held by the calendar.
pub struct EventEditor<K: KeyValueStore> {
    page: SinglePage<Store<K>, Form<Store<K>, Items<K>>>,
    height: u16,
}

impl<K: KeyValueStore + 'static> EventEditor<K> {
    pub fn new(is_edit: bool) -> Self {
        let form = Form::new(vec![
            Box::new(new_title()) as Items<K>,
            Box::new(new_date()),
            Box::new(new_start()),
            Box::new(new_end()),
            Box::new(new_category()),
            Box::new(new_description()),
        ]);
        let height = form.height() + 2; // border

        let (title, instructions) = match is_edit {
            true => (
                "Edit Event",
                vec![("Save", "<Enter>"), ("Delete", "<Ctrl-D>"), ("Cancel", "<Esc>")],
            ),
            false => ("New Event", vec![("Create", "<Enter>"), ("Cancel", "<Esc>")]),
        };
        let page = SinglePage::new(title, form).with_instructions(instructions);
        Self { page, height }
    }

    /// A centered rectangle inside `area` sized for the form.
    pub fn area(&self, area: Rect) -> Rect {
        let width = 60.min(area.width);
        let height = self.height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl<K: KeyValueStore> Component<Store<K>> for EventEditor<K> {
    fn render(&self, store: &RefCell<Store<K>>, area: Rect, buf: &mut Buffer) {
        self.page.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<Store<K>>, area: Rect) -> Option<(u16, u16)> {
        self.page.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<Store<K>>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        match event.code {
            KeyCode::Char('d') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                dispatcher.dispatch(Action::DeleteEvent);
                Some(Message::Handled)
            }
            KeyCode::Esc => {
                dispatcher.dispatch(Action::CloseForm);
                Some(Message::Handled)
            }
            _ => self.page.on_key(dispatcher, store, area, event),
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<Store<K>>) {
        self.page.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<Store<K>>) {
        self.page.deactivate(dispatcher, store);
    }
}

macro_rules! new_input {
    ($fn: ident, $acc: ident, $field: ident, $action: ident) => {
        fn $fn<K: KeyValueStore>() -> Input<Store<K>, $acc> {
            Input::new(FormField::$field.label())
        }

        struct $acc;

        impl<K: KeyValueStore> Access<Store<K>, String> for $acc {
            fn get(store: &RefCell<Store<K>>) -> String {
                let store = store.borrow();
                store
                    .calendar
                    .form()
                    .map(|f| f.value(FormField::$field))
                    .unwrap_or_default()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::$action(value));
                true
            }
        }
    };
}

new_input!(new_title, TitleAccess, Title, UpdateTitle);
new_input!(new_date, DateAccess, Date, UpdateDate);
new_input!(new_start, StartAccess, Start, UpdateStart);
new_input!(new_end, EndAccess, End, UpdateEnd);
new_input!(new_description, DescriptionAccess, Description, UpdateDescription);

fn new_category<K: KeyValueStore>() -> RadioGroup<Store<K>, Category, CategoryAccess> {
    let values = Category::ALL.to_vec();
    let options = values.iter().map(ToString::to_string).collect();
    RadioGroup::new(FormField::Category.label(), values, options)
}

struct CategoryAccess;

impl<K: KeyValueStore> Access<Store<K>, Category> for CategoryAccess {
    fn get(store: &RefCell<Store<K>>) -> Category {
        let store = store.borrow();
        store.calendar.form().map(|f| f.category).unwrap_or_default()
    }

    fn set(dispatcher: &mut Dispatcher, value: Category) -> bool {
        dispatcher.dispatch(Action::UpdateCategory(value));
        true
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use almanac_core::{Calendar, Config, MemoryStore, Storage, TimeFormat};
    use chrono::NaiveDate;

    use super::*;

    fn setup() -> (Rc<RefCell<Store<MemoryStore>>>, Dispatcher) {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let calendar = Calendar::open(Storage::new(MemoryStore::new()), today, &Config::default());
        let store = Rc::new(RefCell::new(CalendarStore::new(calendar, today, TimeFormat::H24)));
        let mut dispatcher = Dispatcher::new();
        CalendarStore::register_to(store.clone(), &mut dispatcher);
        (store, dispatcher)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn typing_and_enter_creates_an_event() {
        let (store, mut dispatcher) = setup();
        dispatcher.dispatch(Action::OpenFocusedDate);
        let mut editor = EventEditor::<MemoryStore>::new(false);
        let area = editor.area(Rect::new(0, 0, 80, 40));
        editor.activate(&mut dispatcher, &store);

        for c in "Gym".chars() {
            editor.on_key(&mut dispatcher, &store, area, key(KeyCode::Char(c)));
        }
        // move to the category and pick the one before personal
        for _ in 0..4 {
            editor.on_key(&mut dispatcher, &store, area, key(KeyCode::Tab));
        }
        editor.on_key(&mut dispatcher, &store, area, key(KeyCode::Left));
        editor.on_key(&mut dispatcher, &store, area, key(KeyCode::Enter));

        let store = store.borrow();
        assert!(store.calendar.form().is_none());
        let event = &store.calendar.events()[0];
        assert_eq!(event.title, "Gym");
        assert_eq!(event.category, Some(Category::Work));
    }

    #[test]
    fn escape_closes_without_saving() {
        let (store, mut dispatcher) = setup();
        dispatcher.dispatch(Action::OpenNewEvent);
        let mut editor = EventEditor::<MemoryStore>::new(false);
        let area = editor.area(Rect::new(0, 0, 80, 40));
        editor.activate(&mut dispatcher, &store);

        editor.on_key(&mut dispatcher, &store, area, key(KeyCode::Char('x')));
        let msg = editor.on_key(&mut dispatcher, &store, area, key(KeyCode::Esc));
        assert_eq!(msg, Some(Message::Handled));
        assert!(store.borrow().calendar.form().is_none());
        assert!(store.borrow().calendar.events().is_empty());
    }

    #[test]
    fn ctrl_d_deletes_in_edit_mode() {
        let (store, mut dispatcher) = setup();
        dispatcher.dispatch(Action::OpenFocusedDate);
        dispatcher.dispatch(Action::UpdateTitle("Call".to_string()));
        dispatcher.dispatch(Action::SubmitForm);
        dispatcher.dispatch(Action::OpenFocusedEvent);

        let mut editor = EventEditor::<MemoryStore>::new(true);
        let area = editor.area(Rect::new(0, 0, 80, 40));
        editor.activate(&mut dispatcher, &store);
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        editor.on_key(&mut dispatcher, &store, area, ctrl_d);

        assert!(store.borrow().calendar.events().is_empty());
        assert!(store.borrow().calendar.storage().load_events().is_empty());
    }

    #[test]
    fn area_is_centered_and_clamped() {
        let editor = EventEditor::<MemoryStore>::new(false);
        let area = editor.area(Rect::new(0, 0, 100, 40));
        assert_eq!((area.x, area.width), (20, 60));
        assert_eq!(area.height, 6 * 3 + 4);

        let small = editor.area(Rect::new(0, 0, 30, 10));
        assert_eq!(small, Rect::new(0, 0, 30, 10));
    }
}
