//! Log Panel Component
//!
//! Displays application logs at the bottom of the screen. While collapsed it
//! shows the latest error and a count of errors not yet looked at.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::state::log_state::LogEntry;
use crate::theme::colors::MdtColors;
use crate::utils::format::{format_time_ms, truncate};

/// Entries rendered while expanded
const VISIBLE_ENTRIES: usize = 50;
const LAST_ERROR_CHARS: usize = 120;

pub struct LogPanel {
    entities: AppEntities,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.entities.logs.update(cx, |logs, cx| {
            logs.toggle_expanded();
            cx.notify();
        });
    }

    fn render_log_entry(&self, entry: &LogEntry) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(MdtColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(format_time_ms(&entry.timestamp)),
            )
            .child(
                div()
                    .text_color(MdtColors::log_level(entry.level))
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .text_color(MdtColors::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.message.clone()),
            )
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let logs = self.entities.logs.read(cx);
        let expanded = logs.expanded;
        let unseen = logs.unseen_errors();
        let last_error = if expanded {
            None
        } else {
            logs.last_error().map(|e| truncate(&e.message, LAST_ERROR_CHARS))
        };
        let entries: Vec<LogEntry> = if expanded {
            logs.entries().iter().rev().take(VISIBLE_ENTRIES).cloned().collect()
        } else {
            Vec::new()
        };
        let count = logs.len();

        let height = if expanded { px(160.0) } else { px(32.0) };
        let entities = self.entities.clone();

        let mut panel = div()
            .h(height)
            .w_full()
            .bg(MdtColors::log_panel_bg())
            .flex()
            .flex_col()
            .child(
                div()
                    .h(px(32.0))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(MdtColors::text_light())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child("Activity"),
                            )
                            .child(
                                div()
                                    .text_color(MdtColors::text_muted())
                                    .text_size(px(11.0))
                                    .child(format!("({count})")),
                            )
                            .when(unseen > 0, |el| {
                                el.child(
                                    div()
                                        .px_2()
                                        .rounded_sm()
                                        .bg(MdtColors::danger())
                                        .text_color(MdtColors::text_light())
                                        .text_size(px(11.0))
                                        .child(format!("{unseen} error(s)")),
                                )
                            })
                            .when_some(last_error, |el, message| {
                                el.child(
                                    div()
                                        .text_color(MdtColors::danger())
                                        .text_size(px(11.0))
                                        .child(message),
                                )
                            }),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .id("clear-logs")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(MdtColors::text_muted())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        entities.logs.update(cx, |logs, cx| {
                                            logs.clear();
                                            cx.notify();
                                        });
                                    })
                                    .child("Clear"),
                            )
                            .child(
                                div()
                                    .id("toggle-logs")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(MdtColors::text_muted())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                        this.toggle_expanded(cx);
                                    }))
                                    .child(if expanded { "▼" } else { "▲" }),
                            ),
                    ),
            );

        if expanded {
            panel = panel.child(
                div()
                    .id("log-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_4()
                    .py_1()
                    .children(entries.iter().map(|entry| self.render_log_entry(entry))),
            );
        }

        panel
    }
}
