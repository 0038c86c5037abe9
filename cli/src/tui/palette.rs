// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use almanac_core::{Category, Theme, ToastKind};
use ratatui::style::{Color, Modifier, Style};

/// Colors used by the calendar views, derived from the persisted theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub today: Color,
    pub focus: Color,
}

impl Palette {
    pub fn new(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                accent: Color::Blue,
                today: Color::Magenta,
                focus: Color::Rgb(0xdb, 0xea, 0xfe),
            },
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::LightBlue,
                today: Color::LightMagenta,
                focus: Color::Rgb(0x1e, 0x29, 0x3b),
            },
            // terminal defaults, only the accents are fixed
            Theme::System => Self {
                fg: Color::Reset,
                bg: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Blue,
                today: Color::Magenta,
                focus: Color::Reset,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::new().fg(self.muted)
    }

    pub fn today(&self) -> Style {
        Style::new().fg(self.today).add_modifier(Modifier::BOLD)
    }

    /// Style of the focused day or event. The system theme has no fixed
    /// background, so it falls back to reversed video.
    pub fn focused(&self) -> Style {
        match self.focus {
            Color::Reset => Style::new().add_modifier(Modifier::REVERSED),
            color => Style::new().bg(color),
        }
    }

    pub fn category(&self, category: Category) -> Style {
        let color = match category {
            Category::Work => Color::Blue,
            Category::Personal => Color::Green,
            Category::Important => Color::Red,
        };
        Style::new().fg(color)
    }

    pub fn toast(&self, kind: ToastKind) -> Style {
        let color = match kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
            ToastKind::Warning => Color::Yellow,
            ToastKind::Info => self.accent,
        };
        Style::new().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_theme_uses_terminal_defaults() {
        let palette = Palette::new(Theme::System);
        assert_eq!(palette.base(), Style::new().fg(Color::Reset).bg(Color::Reset));
        assert!(palette.focused().add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn light_and_dark_differ() {
        let light = Palette::new(Theme::Light);
        let dark = Palette::new(Theme::Dark);
        assert_ne!(light.base(), dark.base());
        assert_eq!(light.focused().bg, Some(light.focus));
    }

    #[test]
    fn categories_have_distinct_colors() {
        let palette = Palette::new(Theme::Dark);
        let styles: Vec<_> = Category::ALL.iter().map(|c| palette.category(*c).fg).collect();
        assert_eq!(styles.len(), 3);
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert_ne!(styles[0], styles[2]);
    }
}
