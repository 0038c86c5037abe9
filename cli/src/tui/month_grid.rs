// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use almanac_core::{CalendarDay, GRID_MAX_VISIBLE, KeyValueStore, format_time, visible_and_hidden};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::Component;
use crate::tui::palette::Palette;
use crate::util::truncate_to_width;

/// The month as a seven column grid, one top-bordered cell per day.
pub struct MonthGrid;

impl<K: KeyValueStore> Component<CalendarStore<K>> for MonthGrid {
    fn render(&self, store: &RefCell<CalendarStore<K>>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let palette = store.palette();
        let days = store.calendar.grid_days(store.today);
        let rows = (days.len() / 7).max(1);

        let [head, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        let columns = Layout::horizontal([Constraint::Ratio(1, 7); 7]);

        let labels = store.calendar.week_start().labels();
        for (label, area) in labels.iter().zip(columns.split(head).iter()) {
            Paragraph::new(*label)
                .centered()
                .style(palette.muted())
                .render(*area, buf);
        }

        let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(body);
        for (week, row) in days.chunks(7).zip(row_areas.iter()) {
            for (day, cell) in week.iter().zip(columns.split(*row).iter()) {
                let focus_event = (day.date == store.focus).then_some(store.focus_event);
                render_day(day, focus_event, &store, &palette, *cell, buf);
            }
        }
    }
}

fn render_day<K: KeyValueStore>(
    day: &CalendarDay<'_>,
    focus_event: Option<usize>,
    store: &CalendarStore<K>,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let is_focused = focus_event.is_some();
    let title_style = match (is_focused, day.is_today, day.is_current_month) {
        (true, _, _) => palette.focused().add_modifier(Modifier::BOLD),
        (false, true, _) => palette.today(),
        (false, false, false) => palette.muted(),
        (false, false, true) => Style::new(),
    };
    let border_style = match is_focused {
        true => Style::new().fg(palette.accent),
        false => palette.muted(),
    };

    let block = Block::new()
        .borders(Borders::TOP)
        .border_style(border_style)
        .title(Span::styled(format!("{:>2}", day.date.format("%-d")), title_style));
    let inner = block.inner(area);
    block.render(area, buf);

    let capacity = inner.height as usize;
    let (visible, _) = visible_and_hidden(&day.events, GRID_MAX_VISIBLE);
    let mut shown = visible.len().min(capacity);
    let mut more = day.events.len() - shown;
    if more > 0 && shown > 0 && shown == capacity {
        // leave the last line for the overflow label
        shown -= 1;
        more += 1;
    }
    if is_focused {
        store.grid_slots.set(shown);
    }
    if capacity == 0 || day.events.is_empty() {
        return;
    }

    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::with_capacity(shown + 1);
    for (i, event) in visible.iter().take(shown).enumerate() {
        let start = format_time(&event.start_time, store.time_format);
        let text = format!("{start} {}", event.title);
        let mut style = palette.category(event.effective_category());
        if !day.is_current_month {
            style = style.add_modifier(Modifier::DIM);
        }
        if focus_event == Some(i) {
            style = style.patch(palette.focused());
        }
        lines.push(Line::styled(truncate_to_width(&text, width), style));
    }
    if more > 0 {
        lines.push(Line::styled(format!("+{more} more"), palette.muted()));
    }
    Paragraph::new(lines).render(inner, buf);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use almanac_core::{Calendar, CalendarEvent, Config, MemoryStore, Storage, TimeFormat};
    use chrono::{NaiveDate, Utc};

    fn event(id: &str, day: u32, start: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: format!("Event {id}"),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            start_time: start.to_string(),
            end_time: "23:00".to_string(),
            description: None,
            category: None,
            color: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn store(events: Vec<CalendarEvent>) -> RefCell<CalendarStore<MemoryStore>> {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let storage = Storage::new(MemoryStore::new());
        let mut calendar = Calendar::open(storage, today, &Config::default());
        for e in events {
            calendar.save_event(e, Instant::now()).unwrap();
        }
        RefCell::new(CalendarStore::new(calendar, today, TimeFormat::H24))
    }

    fn render(store: &RefCell<CalendarStore<MemoryStore>>, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        MonthGrid.render(store, area, &mut buf);
        buf.content()
            .chunks(area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_weekday_labels_and_days() {
        let store = store(vec![]);
        let out = render(&store, Rect::new(0, 0, 105, 31));
        let first = out.lines().next().unwrap();
        assert!(first.contains("Sun"));
        assert!(first.contains("Sat"));
        assert!(out.contains("31"));
        // March 2024 starts on a Friday, the grid opens with February
        assert!(out.contains("25"));
    }

    #[test]
    fn overflowing_day_shows_more_label() {
        let events = (0..5).map(|i| event(&i.to_string(), 5, "09:00")).collect();
        let store = store(events);
        let out = render(&store, Rect::new(0, 0, 105, 31));
        assert!(out.contains("09:00 Event 0"));
        assert!(out.contains("09:00 Event 2"));
        assert!(!out.contains("Event 3"));
        assert!(out.contains("+2 more"));
    }

    #[test]
    fn small_cells_keep_a_line_for_the_label() {
        let events = (0..3).map(|i| event(&i.to_string(), 5, "09:00")).collect();
        let store = store(events);
        // 6 weeks of 3 rows each: one top border and two content lines
        let out = render(&store, Rect::new(0, 0, 105, 19));
        assert!(out.contains("Event 0"));
        assert!(!out.contains("Event 1"));
        assert!(out.contains("+2 more"));
    }

    #[test]
    fn records_how_many_events_the_focused_cell_draws() {
        let events = (0..3).map(|i| event(&i.to_string(), 15, "09:00")).collect();
        let store = store(events);

        render(&store, Rect::new(0, 0, 105, 31));
        assert_eq!(store.borrow().grid_slots.get(), 3);

        render(&store, Rect::new(0, 0, 105, 19));
        assert_eq!(store.borrow().grid_slots.get(), 1);
        assert_eq!(store.borrow().focused_events().len(), 1);
    }
}
