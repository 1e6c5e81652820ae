//! Header Component
//!
//! Title, navigation to the server views and the instructions toggle.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::endpoints::ViewTarget;
use crate::features::map::controller::MapController;
use crate::theme::colors::MdtColors;

pub struct Header {
    entities: AppEntities,
    controller: MapController,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Nav buttons highlight the map the sidebar mirrors
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        let controller = MapController::new(entities.clone());
        Self {
            entities,
            controller,
        }
    }

    fn render_nav_button(&self, target: ViewTarget, active: bool) -> impl IntoElement {
        let controller = self.controller.clone();
        let id = SharedString::from(format!("nav-{}", target.path_segment()));

        div()
            .rounded_md()
            .when(active, |el| el.bg(MdtColors::button_ghost_hover()))
            .child(
                Button::ghost(id, target.title())
                    .size(ButtonSize::Small)
                    .on_click(move |_event, _window, cx| controller.navigate(target, cx)),
            )
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let map_view = self.entities.navigation.read(cx).map_view();
        let nav: Vec<_> = ViewTarget::all()
            .iter()
            .map(|target| self.render_nav_button(*target, *target == map_view))
            .collect();

        let about = {
            let controller = self.controller.clone();
            move |_event: &ClickEvent, _window: &mut Window, cx: &mut gpui::App| {
                controller.toggle_about(cx)
            }
        };

        div()
            .h(px(48.0))
            .w_full()
            .bg(MdtColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(MdtColors::accent())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(MdtColors::text_light())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("M"),
                    )
                    .child(
                        div()
                            .text_color(MdtColors::text_light())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("MDT Explorer"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .children(nav)
                    .child(
                        Button::ghost("nav-instructions", "Instructions")
                            .size(ButtonSize::Small)
                            .on_click(about),
                    ),
            )
    }
}
