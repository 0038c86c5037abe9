// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use almanac_core::{APP_NAME, Calendar, Config as CoreConfig, FileStore, Storage};
use chrono::{Local, NaiveDate};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;

use crate::cmd_add::CmdAdd;
use crate::cmd_agenda::CmdAgenda;
use crate::cmd_delete::CmdDelete;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_theme::CmdTheme;
use crate::cmd_tui::CmdTui;
use crate::config::parse_config;
use crate::logging;

/// Run the Almanac command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    logging::init();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A month calendar for your terminal.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to tui
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/almanac/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/almanac/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdTui::command())
            .subcommand(CmdAgenda::command())
            .subcommand(CmdAdd::command())
            .subcommand(CmdDelete::command())
            .subcommand(CmdTheme::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdTui::NAME, matches)) => Tui(CmdTui::from(matches)),
            Some((CmdAgenda::NAME, matches)) => Agenda(CmdAgenda::from(matches)?),
            Some((CmdAdd::NAME, matches)) => Add(CmdAdd::from(matches)?),
            Some((CmdDelete::NAME, matches)) => Delete(CmdDelete::from(matches)),
            Some((CmdTheme::NAME, matches)) => Theme(CmdTheme::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Tui(CmdTui),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Open the interactive calendar
    Tui(CmdTui),

    /// Print the events of a month
    Agenda(CmdAgenda),

    /// Add a new event
    Add(CmdAdd),

    /// Delete an event
    Delete(CmdDelete),

    /// Show or set the theme
    Theme(CmdTheme),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Tui(a) => {
                let (cal, cfg, today) = Self::open_calendar(config).await?;
                a.run(cal, &cfg, today)
            }
            Agenda(a) => Self::run_with(config, |cal, cfg, today| a.run(cal, cfg, today)).await,
            Add(a)    => Self::run_with(config, |cal, cfg, today| a.run(cal, cfg, today)).await,
            Delete(a) => Self::run_with(config, |cal, _, _| a.run(cal)).await,
            Theme(a)  => Self::run_with(config, |cal, _, _| a.run(cal)).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&mut Calendar<FileStore>, &CoreConfig, NaiveDate) -> Result<(), Box<dyn Error>>,
    {
        let (mut calendar, core_config, today) = Self::open_calendar(config).await?;
        f(&mut calendar, &core_config, today)
    }

    async fn open_calendar(
        config: Option<PathBuf>,
    ) -> Result<(Calendar<FileStore>, CoreConfig, NaiveDate), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let mut core_config = parse_config(config).await?;
        core_config.normalize()?;

        let state_dir = core_config
            .state_dir
            .clone()
            .ok_or("State directory is not configured")?;
        tracing::debug!(state_dir = %state_dir.display(), "opening calendar");

        let today = Local::now().date_naive();
        let storage = Storage::new(FileStore::new(state_dir));
        let calendar = Calendar::open(storage, today, &core_config);
        Ok((calendar, core_config, today))
    }
}
