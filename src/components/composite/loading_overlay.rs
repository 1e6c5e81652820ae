//! Loading Overlay Component

use gpui::{div, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::theme::colors::MdtColors;

/// Full-window overlay shown while a navigation or modification is underway
#[derive(IntoElement)]
pub struct LoadingOverlay {
    message: SharedString,
}

impl LoadingOverlay {
    pub fn new(message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RenderOnce for LoadingOverlay {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .absolute()
            .inset_0()
            .bg(MdtColors::overlay_bg())
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_3()
            .child(
                div()
                    .text_color(MdtColors::text_light())
                    .text_size(px(28.0))
                    .child("⟳"),
            )
            .child(
                div()
                    .text_color(MdtColors::text_light())
                    .text_size(px(20.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(self.message),
            )
    }
}
