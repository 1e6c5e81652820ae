//! Modal Component
//!
//! Centered dialog over a dimmed backdrop. Used for the instructions overlay.

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::MdtColors;

#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<AnyElement>,
    on_close: Option<Box<dyn Fn(&mut App) + 'static>>,
}

impl Modal {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            on_close: None,
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .absolute()
            .inset_0()
            .bg(MdtColors::overlay_bg())
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .bg(MdtColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .w(px(640.0))
                    .max_h(px(620.0))
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(MdtColors::border())
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(18.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(MdtColors::text_primary())
                                    .child(self.title),
                            )
                            .child(
                                div()
                                    .id("modal-close")
                                    .size(px(24.0))
                                    .rounded_sm()
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .text_color(MdtColors::text_muted())
                                    .text_size(px(16.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(MdtColors::button_secondary_bg()))
                                    .when_some(self.on_close, |el, handler| {
                                        el.on_click(move |_event: &ClickEvent, _window, cx| handler(cx))
                                    })
                                    .child("×"),
                            ),
                    )
                    .child(
                        div()
                            .id("modal-body")
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_3()
                            .overflow_y_scroll()
                            .children(self.children),
                    ),
            )
    }
}
