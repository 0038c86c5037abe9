// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Storage behaviour as seen through the calendar.

use std::time::Instant;

use almanac_core::{
    Calendar, EVENTS_KEY, FileStore, MemoryStore, Storage, THEME_KEY, Theme, events_on_date,
};

use crate::common::{date, setup_temp_dirs, test_config, test_event};

#[test]
fn corrupt_events_load_as_empty() {
    let temp_dirs = setup_temp_dirs().unwrap();
    temp_dirs.write_slot(EVENTS_KEY, "[{\"id\": 1,").unwrap();

    let config = test_config(&temp_dirs.state_dir);
    let storage = Storage::new(FileStore::new(&temp_dirs.state_dir));
    let calendar = Calendar::open(storage, date(2024, 3, 2), &config);
    assert!(calendar.events().is_empty());
}

#[test]
fn theme_survives_reopen() {
    let temp_dirs = setup_temp_dirs().unwrap();
    let config = test_config(&temp_dirs.state_dir);

    let storage = Storage::new(FileStore::new(&temp_dirs.state_dir));
    let mut calendar = Calendar::open(storage, date(2024, 3, 2), &config);
    calendar.set_theme(Theme::Dark, Instant::now()).unwrap();

    let storage = Storage::new(FileStore::new(&temp_dirs.state_dir));
    let reopened = Calendar::open(storage, date(2024, 3, 2), &config);
    assert_eq!(reopened.theme(), Theme::Dark);

    // an unknown theme name falls back to the default
    temp_dirs.write_slot(THEME_KEY, "\"sepia\"").unwrap();
    let storage = Storage::new(FileStore::new(&temp_dirs.state_dir));
    let reopened = Calendar::open(storage, date(2024, 3, 2), &config);
    assert_eq!(reopened.theme(), Theme::System);
}

#[test]
fn saved_events_are_grouped_by_day() {
    let config = test_config(std::path::Path::new("/unused"));
    let mut calendar = Calendar::open(Storage::new(MemoryStore::new()), date(2024, 3, 2), &config);
    calendar.save_event(test_event("A", date(2024, 3, 5)), Instant::now()).unwrap();
    calendar.save_event(test_event("B", date(2024, 3, 5)), Instant::now()).unwrap();
    calendar.save_event(test_event("C", date(2024, 3, 6)), Instant::now()).unwrap();

    let titles: Vec<_> = events_on_date(calendar.events(), date(2024, 3, 5))
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, ["A", "B"]);
    assert!(events_on_date(calendar.events(), date(2024, 3, 7)).is_empty());

    // saving an existing id replaces it in place
    let mut b = test_event("B", date(2024, 3, 5));
    b.title = "B2".to_string();
    calendar.save_event(b, Instant::now()).unwrap();
    assert_eq!(calendar.events().len(), 3);
    assert_eq!(calendar.events()[1].title, "B2");
    assert_eq!(calendar.month_event_count(), 3);
}

#[test]
fn delete_event_leaves_others_untouched() {
    let temp_dirs = setup_temp_dirs().unwrap();
    let config = test_config(&temp_dirs.state_dir);
    let storage = Storage::new(FileStore::new(&temp_dirs.state_dir));
    let mut calendar = Calendar::open(storage, date(2024, 3, 2), &config);
    let a = test_event("A", date(2024, 3, 5));
    let b = test_event("B", date(2024, 3, 6));
    calendar.save_event(a.clone(), Instant::now()).unwrap();
    calendar.save_event(b.clone(), Instant::now()).unwrap();

    assert!(calendar.delete_event(&a.id, Instant::now()).unwrap());
    assert!(!calendar.delete_event(&a.id, Instant::now()).unwrap());

    let storage = Storage::new(FileStore::new(&temp_dirs.state_dir));
    assert_eq!(storage.load_events(), vec![b]);
}
