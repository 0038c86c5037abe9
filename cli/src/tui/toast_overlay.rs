// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use almanac_core::{KeyValueStore, ToastKind};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::Component;

const TOAST_WIDTH: u16 = 36;

/// Stacks the live toasts in the bottom right corner, newest at the bottom.
pub struct ToastOverlay;

impl<K: KeyValueStore> Component<CalendarStore<K>> for ToastOverlay {
    fn render(&self, store: &RefCell<CalendarStore<K>>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let palette = store.palette();
        let width = TOAST_WIDTH.min(area.width);
        let mut bottom = area.bottom();

        for toast in store.calendar.toasts().iter().collect::<Vec<_>>().into_iter().rev() {
            let height = 2 + 1 + u16::from(toast.description.is_some());
            if bottom < area.y + height {
                break;
            }
            bottom -= height;
            let rect = Rect::new(area.right() - width, bottom, width, height);

            let style = palette.toast(toast.kind);
            let mut lines = vec![Line::from(vec![
                Span::styled(icon(toast.kind), style),
                Span::raw(" "),
                toast.title.as_str().bold(),
            ])];
            if let Some(description) = &toast.description {
                lines.push(Line::styled(description.as_str(), palette.muted()));
            }

            Clear.render(rect, buf);
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .style(palette.base())
                .block(Block::bordered().border_set(border::ROUNDED).border_style(style))
                .render(rect, buf);
        }
    }
}

fn icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "✗",
        ToastKind::Warning => "!",
        ToastKind::Info => "i",
    }
}
