//! Collapsible Panel Component
//!
//! Titled section with a show/hide affordance. Visibility is owned by
//! `PanelState`; this only renders it.

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::state::panel_state::Panel;
use crate::theme::colors::MdtColors;

#[derive(IntoElement)]
pub struct CollapsiblePanel {
    id: ElementId,
    title: SharedString,
    panel: Panel,
    children: Vec<AnyElement>,
    on_toggle: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl CollapsiblePanel {
    pub fn new(id: impl Into<ElementId>, title: impl Into<SharedString>, panel: Panel) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            panel,
            children: Vec::new(),
            on_toggle: None,
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn on_toggle(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for CollapsiblePanel {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let affordances = self.panel.affordances();

        let header = div()
            .id(self.id)
            .w_full()
            .px_3()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .bg(MdtColors::panel_header_bg())
            .text_size(px(13.0))
            .font_weight(gpui::FontWeight::MEDIUM)
            .text_color(MdtColors::text_primary())
            .cursor_pointer()
            .when_some(self.on_toggle, |el, handler| {
                el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            })
            .child(self.title)
            .child(
                div()
                    .text_color(MdtColors::text_secondary())
                    .when(affordances.show, |el| el.child("▼"))
                    .when(affordances.hide, |el| el.child("▲")),
            );

        div()
            .w_full()
            .flex()
            .flex_col()
            .border_1()
            .border_color(MdtColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(header)
            .when(self.panel.is_visible(), |el| {
                el.child(
                    div()
                        .w_full()
                        .p_3()
                        .bg(MdtColors::content_bg())
                        .flex()
                        .flex_col()
                        .gap_2()
                        .children(self.children),
                )
            })
    }
}
