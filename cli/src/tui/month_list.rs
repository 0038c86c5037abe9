// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use almanac_core::{KeyValueStore, format_time};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::Component;

/// The month as an agenda: days with events, plus today.
pub struct MonthList;

impl<K: KeyValueStore> Component<CalendarStore<K>> for MonthList {
    fn render(&self, store: &RefCell<CalendarStore<K>>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let palette = store.palette();
        let days = store.calendar.list_days(store.today);

        let mut lines: Vec<Line> = Vec::new();
        let mut focus_line = 0;
        for day in &days {
            if !lines.is_empty() {
                lines.push(Line::default());
            }

            let is_focused = day.date == store.focus;
            if is_focused {
                focus_line = lines.len();
            }

            let mut header = vec![Span::styled(
                day.date.format("%A, %B %-d").to_string(),
                match day.is_today {
                    true => palette.today(),
                    false => Style::new().bold(),
                },
            )];
            if day.is_today {
                header.push(Span::styled("  Today", palette.today()));
            }
            let header_style = match is_focused {
                true => palette.focused(),
                false => Style::new(),
            };
            lines.push(Line::from(header).style(header_style));

            if day.events.is_empty() {
                lines.push(Line::styled("  No events scheduled", palette.muted().italic()));
            }

            for (i, event) in day.events.iter().enumerate() {
                let category = event.effective_category();
                let mut title = Style::new().bold();
                if is_focused && i == store.focus_event {
                    title = title.patch(palette.focused());
                }
                lines.push(Line::from(vec![
                    Span::styled("  ▌ ", palette.category(category)),
                    Span::styled(event.title.clone(), title),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("  ▌ ", palette.category(category)),
                    Span::styled(
                        format!(
                            "{} - {}  ",
                            format_time(&event.start_time, store.time_format),
                            format_time(&event.end_time, store.time_format)
                        ),
                        palette.muted(),
                    ),
                    Span::styled(category.to_string(), palette.category(category)),
                ]));
                if let Some(description) = &event.description {
                    lines.push(Line::from(vec![
                        Span::styled("  ▌ ", palette.category(category)),
                        Span::styled(description.clone(), palette.muted()),
                    ]));
                }
            }
        }

        if store.calendar.month_event_count() == 0 {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::styled("No events this month", palette.muted().bold()).centered());
        }

        let height = area.height as usize;
        let scroll = match focus_line < height.saturating_sub(4) {
            true => 0,
            false => focus_line.saturating_sub(height / 3),
        };
        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(area, buf);
    }
}
