// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Color theme preference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    Light,

    /// Dark background.
    Dark,

    /// Follow the terminal's own colors.
    #[default]
    System,
}

const THEME_LIGHT: &str = "light";
const THEME_DARK: &str = "dark";
const THEME_SYSTEM: &str = "system";

impl Theme {
    /// Cycles light → dark → system → light.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }
}

impl AsRef<str> for Theme {
    fn as_ref(&self) -> &str {
        match self {
            Theme::Light => THEME_LIGHT,
            Theme::Dark => THEME_DARK,
            Theme::System => THEME_SYSTEM,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            THEME_LIGHT => Ok(Theme::Light),
            THEME_DARK => Ok(Theme::Dark),
            THEME_SYSTEM => Ok(Theme::System),
            _ => Err(()),
        }
    }
}
