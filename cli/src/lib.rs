// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_add;
mod cmd_agenda;
mod cmd_delete;
mod cmd_generate_completion;
mod cmd_theme;
mod cmd_tui;
mod config;
mod event_formatter;
mod logging;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::parse_config;
