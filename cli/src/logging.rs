// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs::OpenOptions, path::Path, sync::Mutex};

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `almanac_core=debug`.
pub const LOG_ENV: &str = "ALMANAC_LOG";

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to stderr.
pub fn init() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        tracing::debug!(err = %e, "global subscriber already installed");
    }
}

/// Route logs of the current thread to `path` until the guard is dropped.
///
/// The terminal belongs to the TUI while it runs, anything written to stderr
/// would corrupt the screen.
pub fn redirect_to_file(path: &Path) -> Result<DefaultGuard, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    Ok(tracing::subscriber::set_default(subscriber))
}
