//! Stepper Component
//!
//! Numeric control stepping by whole domain steps. Coarse buttons move ten
//! steps at a time.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::MdtColors;

type StepHandler = Rc<dyn Fn(i32, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Stepper {
    id: SharedString,
    value: SharedString,
    on_step: Option<StepHandler>,
}

impl Stepper {
    /// `id` must be unique in the window; button ids are derived from it
    pub fn new(id: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            on_step: None,
        }
    }

    /// Called with the signed number of steps to move
    pub fn on_step(mut self, handler: impl Fn(i32, &mut Window, &mut App) + 'static) -> Self {
        self.on_step = Some(Rc::new(handler));
        self
    }

    fn step_button(&self, glyph: &'static str, steps: i32) -> impl IntoElement {
        let id = ElementId::Name(format!("{}-step{steps:+}", self.id).into());
        let handler = self.on_step.clone();

        div()
            .id(id)
            .w(px(22.0))
            .h(px(22.0))
            .flex()
            .items_center()
            .justify_center()
            .rounded_sm()
            .text_size(px(13.0))
            .text_color(MdtColors::text_secondary())
            .cursor_pointer()
            .hover(|s| s.bg(MdtColors::button_secondary_hover()))
            .when_some(handler, |el, handler| {
                el.on_click(move |_event, window, cx| handler(steps, window, cx))
            })
            .child(glyph)
    }
}

impl RenderOnce for Stepper {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_1()
            .child(self.step_button("«", -10))
            .child(self.step_button("‹", -1))
            .child(
                div()
                    .min_w(px(52.0))
                    .px_2()
                    .py_px()
                    .bg(MdtColors::input_bg())
                    .border_1()
                    .border_color(MdtColors::input_border())
                    .rounded_sm()
                    .text_size(px(13.0))
                    .text_color(MdtColors::text_primary())
                    .flex()
                    .justify_center()
                    .child(self.value.clone()),
            )
            .child(self.step_button("›", 1))
            .child(self.step_button("»", 10))
    }
}
