// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::time::Instant;

use almanac_core::{Calendar, KeyValueStore};
use clap::{ArgMatches, Command, arg};
use colored::Colorize;

#[derive(Debug, Clone)]
pub struct CmdDelete {
    pub id: String,
}

impl CmdDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event by its id")
            .arg(arg!(id: <ID> "The id of the event to delete"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one::<String>("id").cloned().unwrap_or_default(),
        }
    }

    pub fn run<S: KeyValueStore>(self, cal: &mut Calendar<S>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        let title = cal.event(&self.id).map(|e| e.title.clone());
        match (cal.delete_event(&self.id, Instant::now())?, title) {
            (true, Some(title)) => {
                println!("{} {}", "Deleted".green(), title);
                Ok(())
            }
            _ => Err(format!("Event not found: {}", self.id).into()),
        }
    }
}
