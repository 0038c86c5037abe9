// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de;

use crate::datetime::parse_time;
use crate::event::Category;
use crate::form::FormDefaults;
use crate::toast::DEFAULT_TOAST_DURATION;
use crate::view::ViewMode;

/// The name of the Almanac application.
pub const APP_NAME: &str = "almanac";

const DEFAULT_START: &str = "09:00";
const DEFAULT_END: &str = "10:00";

/// Configuration for the Almanac application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory for storing application state, i.e., events and preferences.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// The view shown on startup.
    #[serde(default)]
    pub default_view: ViewMode,

    /// The first day of the week in the month grid.
    #[serde(default)]
    pub week_start: WeekStart,

    /// Clock style used when displaying event times.
    #[serde(default)]
    pub time_format: TimeFormat,

    /// How long a notification stays on screen.
    #[serde(default)]
    pub toast_duration: Option<ConfigDuration>,

    /// Default start time for new events.
    #[serde(default = "default_start")]
    pub default_start: String,

    /// Default end time for new events.
    #[serde(default = "default_end")]
    pub default_end: String,

    /// Default category for new events.
    #[serde(default)]
    pub default_category: Category,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            default_view: ViewMode::default(),
            week_start: WeekStart::default(),
            time_format: TimeFormat::default(),
            toast_duration: None,
            default_start: default_start(),
            default_end: default_end(),
            default_category: Category::default(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        // Normalize state directory
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                )
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        };

        // Fall back to the built-in window if the configured times are not HH:MM
        if parse_time(&self.default_start).is_none() {
            tracing::warn!(value = %self.default_start, "invalid default_start, using 09:00");
            self.default_start = default_start();
        }
        if parse_time(&self.default_end).is_none() {
            tracing::warn!(value = %self.default_end, "invalid default_end, using 10:00");
            self.default_end = default_end();
        }

        Ok(())
    }

    /// Defaults applied to the event form when creating an event.
    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            start_time: self.default_start.clone(),
            end_time: self.default_end.clone(),
            category: self.default_category,
        }
    }

    /// Lifetime of a notification.
    pub fn toast_duration(&self) -> Duration {
        self.toast_duration
            .map(|a| a.0)
            .unwrap_or(DEFAULT_TOAST_DURATION)
    }
}

fn default_start() -> String {
    DEFAULT_START.to_string()
}

fn default_end() -> String {
    DEFAULT_END.to_string()
}

/// The first day of a week.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks start on Sunday.
    #[default]
    Sunday,

    /// Weeks start on Monday.
    Monday,
}

impl WeekStart {
    /// Short weekday labels in display order.
    pub fn labels(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }
}

/// Clock style, 24-hour or 12-hour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub enum TimeFormat {
    /// `14:30`
    #[default]
    #[serde(rename = "24h")]
    H24,

    /// `2:30 PM`
    #[serde(rename = "12h")]
    H12,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDuration(pub Duration);

impl<'de> serde::Deserialize<'de> for ConfigDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DurationVisitor;

        impl<'de> de::Visitor<'de> for DurationVisitor {
            type Value = ConfigDuration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a duration string like "HH:MM", "4s", "1500ms" or "1m""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_duration(value)
                    .map(ConfigDuration)
                    .map_err(|e| de::Error::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}

/// Parse a duration string in the format "HH:MM" / "1500ms" / "4s" / "1m" / "1h".
fn parse_duration(s: &str) -> Result<Duration, Box<dyn Error>> {
    let s = s.trim();
    if let Some((h, m)) = s.split_once(':') {
        let hours: u64 = h.trim().parse()?;
        let minutes: u64 = m.trim().parse()?;
        hours
            .checked_mul(60)
            .and_then(|a| a.checked_add(minutes))
            .and_then(|a| a.checked_mul(60))
            .map(Duration::from_secs)
            .ok_or_else(|| format!("Duration out of range: {s}").into())
    }
    // "ms" must be checked before "m" and "s"
    else if let Some(rest) = s.strip_suffix("ms") {
        Ok(Duration::from_millis(rest.trim().parse()?))
    } else if let Some(rest) = s.strip_suffix("s") {
        Ok(Duration::from_secs(rest.trim().parse()?))
    } else if let Some(rest) = s.strip_suffix("m") {
        scaled_secs(rest, 60, s)
    } else if let Some(rest) = s.strip_suffix("h") {
        scaled_secs(rest, 3600, s)
    } else {
        Err(format!("Invalid duration format: {s}").into())
    }
}

fn scaled_secs(value: &str, unit: u64, raw: &str) -> Result<Duration, Box<dyn Error>> {
    let value: u64 = value.trim().parse()?;
    value
        .checked_mul(unit)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("Duration out of range: {raw}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_home_env() {
        let home = get_home_dir().unwrap();
        let home_prefixes: &[&str] = if cfg!(unix) {
            &["~", "$HOME", "${HOME}"]
        } else {
            &[r"~", r"%UserProfile%"]
        };
        for prefix in home_prefixes {
            let result = expand_path(&PathBuf::from(format!("{prefix}/Documents"))).unwrap();
            assert_eq!(result, home.join("Documents"));
            assert!(result.is_absolute());
        }
    }

    #[test]
    fn test_expand_path_absolute() {
        let absolute_path = PathBuf::from("/var/lib/almanac");
        let result = expand_path(&absolute_path).unwrap();
        assert_eq!(result, absolute_path);
    }

    #[test]
    fn test_expand_path_relative() {
        let relative_path = PathBuf::from("relative/path/to/state");
        let result = expand_path(&relative_path).unwrap();
        assert_eq!(result, relative_path);
    }

    #[test]
    fn test_parse_duration_colon_format() {
        assert_eq!(parse_duration("00:04").unwrap(), Duration::from_secs(240));
        assert_eq!(parse_duration("01:30").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration("00:00").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_duration_suffix_format() {
        assert_eq!(parse_duration("1500ms").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_duration("4s").unwrap(), Duration::from_secs(4));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
    }

    #[test]
    fn test_parse_duration_rejects_overflow() {
        assert!(parse_duration("18446744073709551615m").is_err());
        assert!(parse_duration("18446744073709551615h").is_err());
        assert!(parse_duration("18446744073709551615:00").is_err());
        assert!(parse_duration("0:18446744073709551615").is_err());
    }

    #[test]
    fn test_parse_duration_invalid_format() {
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("99x").is_err());
        assert!(parse_duration("12:xx").is_err());
        assert!(parse_duration("-4s").is_err());
        assert!(parse_duration("12").is_err());
    }

    #[test]
    fn test_normalize_replaces_invalid_default_times() {
        let mut config = Config {
            state_dir: Some(PathBuf::from("/tmp/almanac-state")),
            default_start: "nine".to_string(),
            default_end: "25:99".to_string(),
            ..Default::default()
        };
        config.normalize().unwrap();
        assert_eq!(config.default_start, "09:00");
        assert_eq!(config.default_end, "10:00");
        assert_eq!(config.state_dir, Some(PathBuf::from("/tmp/almanac-state")));
    }

    #[test]
    fn test_toast_duration_defaults() {
        let config = Config::default();
        assert_eq!(config.toast_duration(), DEFAULT_TOAST_DURATION);

        let config = Config {
            toast_duration: Some(ConfigDuration(Duration::from_secs(2))),
            ..Default::default()
        };
        assert_eq!(config.toast_duration(), Duration::from_secs(2));
    }
}
