// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::time::Instant;

use almanac_core::{Calendar, KeyValueStore, Theme};
use clap::{ArgMatches, Command, arg, value_parser};

#[derive(Debug, Clone, Copy)]
pub struct CmdTheme {
    pub theme: Option<Theme>,
}

impl CmdTheme {
    pub const NAME: &str = "theme";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the current theme, or switch to another one")
            .arg(arg!(theme: [THEME] "The theme to use").value_parser(value_parser!(Theme)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            theme: matches.get_one("theme").copied(),
        }
    }

    pub fn run<S: KeyValueStore>(self, cal: &mut Calendar<S>) -> Result<(), Box<dyn Error>> {
        match self.theme {
            Some(theme) => {
                tracing::debug!(%theme, "switching theme...");
                cal.set_theme(theme, Instant::now())?;
            }
            None => println!("{}", cal.theme()),
        }
        Ok(())
    }
}
