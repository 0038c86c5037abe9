// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use almanac_core::{Calendar, Config as CoreConfig, KeyValueStore};
use chrono::NaiveDate;
use clap::{ArgMatches, Command};

use crate::{logging, tui};

const LOG_FILE: &str = "almanac.log";

#[derive(Debug, Clone, Copy)]
pub struct CmdTui;

impl CmdTui {
    pub const NAME: &str = "tui";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Open the interactive calendar, the default command")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub fn run<K: KeyValueStore + 'static>(
        self,
        cal: Calendar<K>,
        cfg: &CoreConfig,
        today: NaiveDate,
    ) -> Result<(), Box<dyn Error>> {
        // the terminal belongs to the tui from here on
        let _guard = match &cfg.state_dir {
            Some(dir) => Some(logging::redirect_to_file(&dir.join(LOG_FILE))?),
            None => None,
        };

        tracing::info!(%today, "starting tui...");
        let cal = tui::run_calendar(cal, today, cfg.time_format)?;
        tracing::info!(events = cal.events().len(), "tui closed");
        Ok(())
    }
}
