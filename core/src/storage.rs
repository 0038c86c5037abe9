// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::event::CalendarEvent;
use crate::theme::Theme;

/// Storage key of the event collection.
pub const EVENTS_KEY: &str = "calendar-events";

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "calendar-theme";

/// Errors raised while persisting state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the underlying slot failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The value could not be serialized.
    #[error("failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A persistent string slot per key.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`, if any.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_of(key);
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        // write to a sibling file first so a crash never leaves a truncated blob
        let path = self.path_of(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_of(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

/// In-memory store, nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// Typed access to the application state on top of a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct Storage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Loads the event collection. Missing, unreadable or corrupt data yields an empty list.
    pub fn load_events(&self) -> Vec<CalendarEvent> {
        let text = match self.store.get(EVENTS_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(err = %e, "failed to read events, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(err = %e, "discarding unparsable events");
                Vec::new()
            }
        }
    }

    /// Persists the full event collection.
    pub fn save_events(&mut self, events: &[CalendarEvent]) -> Result<(), StorageError> {
        tracing::debug!(count = events.len(), "saving events");
        let text = serde_json::to_string(events).map_err(|source| StorageError::Serialize {
            key: EVENTS_KEY.to_string(),
            source,
        })?;
        self.store.set(EVENTS_KEY, &text)
    }

    /// Loads the theme preference, falling back to the default.
    pub fn load_theme(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!(err = %e, "discarding unparsable theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(err = %e, "failed to read theme");
                Theme::default()
            }
        }
    }

    /// Persists the theme preference.
    pub fn save_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        let text = serde_json::to_string(&theme).map_err(|source| StorageError::Serialize {
            key: THEME_KEY.to_string(),
            source,
        })?;
        self.store.set(THEME_KEY, &text)
    }
}
