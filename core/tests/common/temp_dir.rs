// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Temporary directories used for testing, removed when dropped.
#[derive(Debug)]
pub struct TempDirs {
    /// State directory holding the persisted key files.
    pub state_dir: PathBuf,

    _base: TempDir,
}

impl TempDirs {
    /// Creates new temporary directories for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?;
        let state_dir = base.path().join("state");
        std::fs::create_dir_all(&state_dir)?;
        Ok(Self {
            state_dir,
            _base: base,
        })
    }

    /// Writes raw text to the slot file of `key`, bypassing the store.
    pub fn write_slot(&self, key: &str, content: &str) -> Result<PathBuf, std::io::Error> {
        let path = self.state_dir.join(format!("{key}.json"));
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

/// Sets up temporary directories for integration tests.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    TempDirs::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dirs_creates_directories() {
        let dirs = TempDirs::new().unwrap();
        assert!(dirs.state_dir.is_dir());
    }

    #[test]
    fn temp_dirs_cleanup_on_drop() {
        let state_dir = {
            let dirs = TempDirs::new().unwrap();
            dirs.state_dir.clone()
        };
        assert!(!state_dir.exists());
    }
}
