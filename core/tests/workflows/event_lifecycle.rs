// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! Create, edit and delete events through the form, then check that a fresh
//! calendar opened on the same directory sees the same collection.

use std::time::Instant;

use almanac_core::{Calendar, Category, FileStore, Storage, Submission};

use crate::common::{
    assert_event_matches, assert_file_exists, date, setup_temp_dirs, test_config, utc,
};

fn open(dir: &std::path::Path) -> Calendar<FileStore> {
    let config = test_config(dir);
    Calendar::open(Storage::new(FileStore::new(dir)), date(2024, 3, 2), &config)
}

#[test]
fn event_lifecycle_create_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().unwrap();
    let mut calendar = open(&temp_dirs.state_dir);

    // Act
    calendar.open_date(date(2024, 3, 5));
    let form = calendar.form_mut().unwrap();
    form.set_title("Team Meeting");
    form.set_start_time("14:00");
    form.set_end_time("15:30");
    form.cycle_category(false);
    let event = calendar.submit_form(utc(2024, 3, 2, 9), Instant::now()).unwrap().into_event();

    // Assert - verify event created
    assert_event_matches(&event, "Team Meeting", date(2024, 3, 5));
    assert_eq!(event.category, Some(Category::Work));
    assert_file_exists(&temp_dirs.state_dir.join("calendar-events.json"));

    // Assert - visible after reopening
    let reopened = open(&temp_dirs.state_dir);
    assert_eq!(reopened.events(), [event]);
}

#[test]
fn event_lifecycle_update_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().unwrap();
    let mut calendar = open(&temp_dirs.state_dir);
    calendar.open_date(date(2024, 3, 5));
    calendar.form_mut().unwrap().set_title("Original Title");
    let created = calendar
        .submit_form(utc(2024, 3, 2, 9), Instant::now())
        .unwrap()
        .into_event();

    // Act - update event
    assert!(calendar.open_event(&created.id));
    let form = calendar.form_mut().unwrap();
    form.set_title("Updated Title");
    form.set_date("2024-03-08");
    let submission = calendar.submit_form(utc(2024, 3, 3, 9), Instant::now()).unwrap();

    // Assert
    let Submission::Updated(updated) = submission else {
        panic!("editing should update the event");
    };
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.updated_at, utc(2024, 3, 3, 9));

    let reopened = open(&temp_dirs.state_dir);
    assert_eq!(reopened.events().len(), 1);
    assert_event_matches(&reopened.events()[0], "Updated Title", date(2024, 3, 8));
}

#[test]
fn event_lifecycle_delete_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().unwrap();
    let mut calendar = open(&temp_dirs.state_dir);
    let mut ids = Vec::new();
    for title in ["A", "B", "C"] {
        calendar.open_date(date(2024, 3, 5));
        calendar.form_mut().unwrap().set_title(title);
        let submission = calendar.submit_form(utc(2024, 3, 2, 9), Instant::now()).unwrap();
        ids.push(submission.event().id.clone());
    }

    // Act - delete the middle one through the form
    calendar.open_event(&ids[1]);
    assert!(calendar.delete_selected(Instant::now()));

    // Assert
    let reopened = open(&temp_dirs.state_dir);
    let titles: Vec<_> = reopened.events().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["A", "C"]);
}

#[test]
fn event_lifecycle_ids_are_unique() {
    let temp_dirs = setup_temp_dirs().unwrap();
    let mut calendar = open(&temp_dirs.state_dir);
    for _ in 0..20 {
        calendar.open_new_event(date(2024, 3, 2));
        calendar.form_mut().unwrap().set_title("Same title");
        calendar.submit_form(utc(2024, 3, 2, 9), Instant::now()).unwrap();
    }

    let mut ids: Vec<_> = calendar.events().iter().map(|e| e.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}
