// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use almanac_core::{Calendar, CalendarEvent, Config as CoreConfig, KeyValueStore};
use chrono::NaiveDate;
use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::event_formatter::EventFormatter;
use crate::util::{ArgOutputFormat, parse_month_arg};

#[derive(Debug, Clone, Copy)]
pub struct CmdAgenda {
    pub month: Option<NaiveDate>,
    pub output_format: ArgOutputFormat,
}

impl CmdAgenda {
    pub const NAME: &str = "agenda";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("list")
            .about("Print the events of a month in agenda order")
            .arg(
                arg!(--month <MONTH> "Month to print, in YYYY-MM format. Defaults to this month")
                    .value_parser(parse_month_arg),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            month: matches.get_one::<NaiveDate>("month").copied(),
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub fn run<S: KeyValueStore>(
        self,
        cal: &mut Calendar<S>,
        cfg: &CoreConfig,
        today: NaiveDate,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "printing agenda...");
        if let Some(month) = self.month {
            cal.set_anchor(month);
        }

        let days = cal.list_days(today);
        let events: Vec<&CalendarEvent> = days
            .iter()
            .flat_map(|d| d.events.iter().copied())
            .collect();
        let formatter =
            EventFormatter::new(cfg.time_format).with_output_format(self.output_format);

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", formatter.format(&events)),
            ArgOutputFormat::Table => {
                let title = cal.anchor().format("%B %Y").to_string();
                println!("{} ({} events)", title.bold(), events.len());
                if events.is_empty() {
                    println!("{}", "No events this month".italic());
                } else {
                    println!("{}", formatter.format(&events));
                }
            }
        }
        Ok(())
    }
}
