// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod calendar_store;
mod calendar_view;
mod component;
mod component_form;
mod component_page;
mod dispatcher;
mod event_editor;
mod header;
mod month_grid;
mod month_list;
mod palette;
mod toast_overlay;

pub use app::run_calendar;
