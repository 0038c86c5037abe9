// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::time::Instant;

use almanac_core::{Calendar, Category, Config as CoreConfig, EventForm, KeyValueStore};
use chrono::{NaiveDate, Utc};
use clap::{ArgMatches, Command, arg, value_parser};

use crate::event_formatter::EventFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdAdd {
    pub title: String,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,

    pub output_format: ArgOutputFormat,
}

impl CmdAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a new event")
            .arg(arg!(title: <TITLE> "Title of the event"))
            .arg(arg!(--date <DATE> "Date in YYYY-MM-DD format. Defaults to today"))
            .arg(arg!(--start <TIME> "Start time in HH:MM format"))
            .arg(arg!(--end <TIME> "End time in HH:MM format"))
            .arg(
                arg!(--category <CATEGORY> "Category of the event")
                    .value_parser(value_parser!(Category)),
            )
            .arg(arg!(-d --description <DESCRIPTION> "Description of the event"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let title = matches
            .get_one::<String>("title")
            .ok_or("Title is required for new event")?
            .clone();

        Ok(Self {
            title,
            date: matches.get_one("date").cloned(),
            start: matches.get_one("start").cloned(),
            end: matches.get_one("end").cloned(),
            category: matches.get_one("category").copied(),
            description: matches.get_one("description").cloned(),

            output_format: ArgOutputFormat::from(matches),
        })
    }

    /// Builds the event with the same rules as the interactive form.
    pub fn run<S: KeyValueStore>(
        self,
        cal: &mut Calendar<S>,
        cfg: &CoreConfig,
        today: NaiveDate,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let mut form = EventForm::create(today, &cfg.form_defaults());
        form.set_title(self.title);
        if let Some(date) = self.date {
            form.set_date(date);
        }
        if let Some(start) = self.start {
            form.set_start_time(start);
        }
        if let Some(end) = self.end {
            form.set_end_time(end);
        }
        if let Some(category) = self.category {
            form.set_category(category);
        }
        if let Some(description) = self.description {
            form.set_description(description);
        }

        let event = form.submit(Utc::now())?.into_event();
        cal.save_event(event.clone(), Instant::now())?;

        let formatter =
            EventFormatter::new(cfg.time_format).with_output_format(self.output_format);
        println!("{}", formatter.format(&[&event]));
        Ok(())
    }
}
