// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use almanac_core::{KeyValueStore, ViewMode};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::Component;

/// Month title with the event count on the left, view and theme on the right.
pub struct Header;

impl<K: KeyValueStore> Component<CalendarStore<K>> for Header {
    fn render(&self, store: &RefCell<CalendarStore<K>>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let palette = store.palette();
        let count = store.calendar.month_event_count();

        let title = Line::from(vec![
            Span::styled("‹ ", palette.muted()),
            store.calendar.anchor().format("%B %Y").to_string().bold(),
            Span::styled(" ›", palette.muted()),
            Span::styled(
                match count {
                    1 => "  1 event".to_string(),
                    n => format!("  {n} events"),
                },
                palette.muted(),
            ),
        ]);

        let mode = store.calendar.view_mode();
        let tab = |m: ViewMode, label: &'static str| match m == mode {
            true => Span::styled(label, Style::new().fg(palette.accent).bold()),
            false => Span::styled(label, palette.muted()),
        };
        let status = Line::from(vec![
            tab(ViewMode::Grid, "Grid"),
            Span::styled(" | ", palette.muted()),
            tab(ViewMode::List, "List"),
            Span::styled(format!("  Theme: {}", store.calendar.theme()), palette.muted()),
        ]);

        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(status.width() as u16)])
                .areas(area);
        Paragraph::new(title).render(left, buf);
        Paragraph::new(status).render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::{Calendar, Config, MemoryStore, Storage, TimeFormat};
    use chrono::NaiveDate;

    #[test]
    fn shows_month_count_and_view() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let calendar = Calendar::open(Storage::new(MemoryStore::new()), today, &Config::default());
        let store = RefCell::new(CalendarStore::new(calendar, today, TimeFormat::H24));

        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        Header.render(&store, area, &mut buf);
        let line: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(line.starts_with("‹ March 2024 ›  0 events"));
        assert!(line.trim_end().ends_with("Grid | List  Theme: system"));
    }
}
