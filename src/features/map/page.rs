//! Map Page
//!
//! Overview of the committed modifiers, the inspector pane and the sidebar
//! with the segment editor and the collapsible map panels.

use gpui::{
    div, prelude::*, px, AnyElement, ClickEvent, Context, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::panel::CollapsiblePanel;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::stepper::Stepper;
use crate::constants::{INSPECTOR_WIDTH, SIDEBAR_WIDTH};
use crate::domain::endpoints::{SubjectId, ViewTarget};
use crate::domain::modifiers::ModifierSlot;
use crate::features::map::controller::MapController;
use crate::state::controls::{ControlSurface, LabelId};
use crate::state::inspector_state::{InspectorLoader, InspectorPhase};
use crate::state::panel_state::{PanelKey, PanelState};
use crate::state::parameter_store::ParameterStore;
use crate::theme::colors::MdtColors;
use crate::utils::format::{format_display_number, fragment_text};

pub struct MapPage {
    entities: AppEntities,
    controller: MapController,
    /// Segment id chosen in the worst-segments picker
    picked_segment: u32,
}

impl MapPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.parameters, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.panels, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.inspector, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify()).detach();

        let controller = MapController::new(entities.clone());
        Self {
            entities,
            controller,
            picked_segment: 1,
        }
    }

    fn step_picker(&mut self, steps: i32, cx: &mut Context<Self>) {
        let next = i64::from(self.picked_segment) + i64::from(steps);
        self.picked_segment = u32::try_from(next.max(1)).unwrap_or(u32::MAX);
        cx.notify();
    }

    // ==================== Overview ====================

    fn render_overview(&self, view: ViewTarget, store: &ParameterStore, cx: &Context<Self>) -> impl IntoElement {
        let config = self.entities.config.read(cx);
        let base = config.endpoints().base().to_string();
        let committed = store.encoded();

        div()
            .flex_1()
            .h_full()
            .p_6()
            .flex()
            .flex_col()
            .gap_4()
            .bg(MdtColors::background())
            .child(
                div()
                    .text_size(px(22.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(MdtColors::text_primary())
                    .child(format!("Network {} Map", view.title())),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(MdtColors::text_secondary())
                    .child(format!("Server: {base}")),
            )
            .child(
                div()
                    .p_4()
                    .rounded_md()
                    .bg(MdtColors::content_bg())
                    .border_1()
                    .border_color(MdtColors::border())
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .text_color(MdtColors::text_secondary())
                            .child("Applied modifiers"),
                    )
                    .child(
                        div()
                            .text_size(px(15.0))
                            .text_color(MdtColors::text_primary())
                            .child(committed.to_string()),
                    )
                    .when(store.is_dirty(), |el| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(MdtColors::warning())
                                .child("The editor has changes that are not applied yet"),
                        )
                    }),
            )
            .child(
                div().flex().child(
                    Button::primary("open-map", format!("Open {} map", view.title())).on_click({
                        let controller = self.controller.clone();
                        move |_event, _window, cx| controller.navigate(view, cx)
                    }),
                ),
            )
    }

    // ==================== Inspector ====================

    fn render_inspector(&self, loader: &InspectorLoader, panels: &PanelState, cx: &Context<Self>) -> Option<AnyElement> {
        let slot = loader.slot();
        let phase = loader.phase();

        if let Some(failure) = slot.failure.clone() {
            if phase == InspectorPhase::Closed {
                let controller = self.controller.clone();
                return Some(
                    div()
                        .w(px(INSPECTOR_WIDTH))
                        .h_full()
                        .p_4()
                        .bg(MdtColors::content_bg())
                        .border_l_1()
                        .border_color(MdtColors::border())
                        .flex()
                        .flex_col()
                        .gap_3()
                        .child(div().text_color(MdtColors::danger()).text_sm().child(failure))
                        .child(
                            div().flex().child(
                                Button::secondary("dismiss-failure", "Dismiss")
                                    .size(ButtonSize::Small)
                                    .on_click(move |_event, _window, cx| {
                                        controller.dismiss_inspector_failure(cx)
                                    }),
                            ),
                        )
                        .into_any_element(),
                );
            }
        }

        let pending = phase == InspectorPhase::Pending;
        if !slot.visible && !pending {
            return None;
        }

        let title: SharedString = match loader.current_subject().or(slot.subject) {
            Some(subject) => format!("Inspecting segment {subject}").into(),
            None => "Inspector".into(),
        };

        let body: AnyElement = if pending {
            div()
                .text_sm()
                .text_color(MdtColors::text_secondary())
                .child("⟳ Loading segment...")
                .into_any_element()
        } else {
            let lines = fragment_text(&slot.content);
            let inspector_panels: Vec<AnyElement> = PanelKey::ALL
                .into_iter()
                .filter(PanelKey::is_inspector_panel)
                .map(|key| self.render_inspector_panel(key, panels, cx))
                .collect();

            div()
                .flex()
                .flex_col()
                .gap_2()
                .children(lines.into_iter().map(|line| {
                    div()
                        .text_sm()
                        .text_color(MdtColors::text_primary())
                        .child(line)
                }))
                .children(inspector_panels)
                .into_any_element()
        };

        let close = {
            let controller = self.controller.clone();
            move |_event: &ClickEvent, _window: &mut gpui::Window, cx: &mut gpui::App| {
                controller.close_inspector(cx)
            }
        };

        Some(
            div()
                .id("inspector")
                .w(px(INSPECTOR_WIDTH))
                .h_full()
                .bg(MdtColors::content_bg())
                .border_l_1()
                .border_color(MdtColors::border())
                .flex()
                .flex_col()
                .overflow_y_scroll()
                .when(slot.sliding_out, |el| el.opacity(0.4))
                .child(
                    div()
                        .px_4()
                        .py_3()
                        .flex()
                        .items_center()
                        .justify_between()
                        .border_b_1()
                        .border_color(MdtColors::border())
                        .child(
                            div()
                                .text_size(px(16.0))
                                .font_weight(gpui::FontWeight::SEMIBOLD)
                                .text_color(MdtColors::text_primary())
                                .child(title),
                        )
                        .child(
                            Button::secondary("inspector-close", "×")
                                .size(ButtonSize::Small)
                                .on_click(close),
                        ),
                )
                .child(div().p_4().child(body))
                .into_any_element(),
        )
    }

    fn render_inspector_panel(&self, key: PanelKey, panels: &PanelState, cx: &Context<Self>) -> AnyElement {
        let controller = self.controller.clone();
        let view = self.entities.navigation.read(cx).map_view();

        CollapsiblePanel::new(key.dom_id(), key.title(), panels.panel(key))
            .on_toggle(move |_window, cx| controller.toggle_panel(key, cx))
            .child(
                div()
                    .text_sm()
                    .text_color(MdtColors::text_secondary())
                    .child(format!("Drawn on the {} page in the browser.", view.title())),
            )
            .into_any_element()
    }

    // ==================== Sidebar ====================

    fn render_sidebar(&self, view: ViewTarget, store: &ParameterStore, panels: &PanelState, cx: &mut Context<Self>) -> impl IntoElement {
        let hide = {
            let controller = self.controller.clone();
            move |_event: &ClickEvent, _window: &mut gpui::Window, cx: &mut gpui::App| {
                controller.toggle_sidebar(cx)
            }
        };

        let sections: Vec<AnyElement> = PanelKey::sidebar_panels(view)
            .into_iter()
            .map(|key| {
                let controller = self.controller.clone();
                let body = self.render_panel_body(key, view, store, cx);
                CollapsiblePanel::new(key.dom_id(), key.title(), panels.panel(key))
                    .on_toggle(move |_window, cx| controller.toggle_panel(key, cx))
                    .child(body)
                    .into_any_element()
            })
            .collect();

        div()
            .id("sidebar")
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .bg(MdtColors::sidebar_bg())
            .border_l_1()
            .border_color(MdtColors::border())
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .child(
                div()
                    .px_3()
                    .py_3()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(MdtColors::text_primary())
                            .child(format!("Network {} Map", view.title())),
                    )
                    .child(Button::secondary("sidebar-btn-hide", "›").size(ButtonSize::Small).on_click(hide)),
            )
            .child(div().px_3().pb_3().flex().flex_col().gap_2().children(sections))
    }

    fn render_panel_body(&self, key: PanelKey, view: ViewTarget, store: &ParameterStore, cx: &mut Context<Self>) -> AnyElement {
        match key {
            PanelKey::SegmentEditor => self.render_editor(store).into_any_element(),
            PanelKey::Legend => {
                let committed = store.committed();
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .text_sm()
                    .text_color(MdtColors::text_secondary())
                    .child(format!(
                        "Segments drawn between {}% and {}% of the network maximum",
                        format_display_number(committed.lower_bound),
                        format_display_number(committed.upper_bound)
                    ))
                    .child(if committed.draw_zero_values {
                        "Segments without vehicles are drawn"
                    } else {
                        "Segments without vehicles are hidden"
                    })
                    .into_any_element()
            }
            PanelKey::WorstSegments => self.render_segment_picker(cx).into_any_element(),
            PanelKey::Export => {
                let controller = self.controller.clone();
                div()
                    .flex()
                    .justify_center()
                    .child(
                        Button::primary("download-btn", "Download as a 'zip' file")
                            .on_click(move |_event, _window, cx| controller.download(cx)),
                    )
                    .into_any_element()
            }
            _ => {
                let controller = self.controller.clone();
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .text_color(MdtColors::text_secondary())
                            .child(format!("Computed by the server for the {} map.", view.title())),
                    )
                    .child(
                        div().flex().child(
                            Button::secondary(SharedString::from(format!("{}-open", key.dom_id())), "Open in browser")
                                .size(ButtonSize::Small)
                                .on_click(move |_event, _window, cx| controller.navigate(view, cx)),
                        ),
                    )
                    .into_any_element()
            }
        }
    }

    fn render_segment_picker(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let page = cx.weak_entity();
        let subject = SubjectId(self.picked_segment);
        let inspect = {
            let controller = self.controller.clone();
            move |_event: &ClickEvent, _window: &mut gpui::Window, cx: &mut gpui::App| {
                controller.inspect(subject, cx)
            }
        };
        let close = {
            let controller = self.controller.clone();
            move |_event: &ClickEvent, _window: &mut gpui::Window, cx: &mut gpui::App| {
                controller.close_inspector(cx)
            }
        };

        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(div().text_sm().text_color(MdtColors::text_secondary()).child("Segment"))
                    .child(
                        Stepper::new("segment-picker", self.picked_segment.to_string()).on_step(
                            move |steps, _window, cx| {
                                let _ = page.update(cx, |this, cx| this.step_picker(steps, cx));
                            },
                        ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .justify_center()
                    .child(Button::primary("inspect-btn", "Inspect").size(ButtonSize::Small).on_click(inspect))
                    .child(Button::secondary("inspect-close-btn", "Close inspector").size(ButtonSize::Small).on_click(close)),
            )
    }

    // ==================== Segment editor ====================

    fn render_slot_row(&self, slot: ModifierSlot, store: &ParameterStore, label: Option<String>) -> impl IntoElement {
        let controller = self.controller.clone();
        let value = store.controls().value(slot);

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .gap_2()
            .child(
                div()
                    .flex_1()
                    .text_sm()
                    .text_color(MdtColors::text_primary())
                    .child(slot.label()),
            )
            .child(
                Stepper::new(SharedString::from(slot.control_name()), value)
                    .on_step(move |steps, _window, cx| controller.nudge(slot, steps, cx)),
            )
            .child(
                div()
                    .w(px(48.0))
                    .text_sm()
                    .text_color(MdtColors::text_secondary())
                    .child(label.unwrap_or_default()),
            )
    }

    fn render_editor(&self, store: &ParameterStore) -> impl IntoElement {
        let controls = store.controls();
        let multipliers: Vec<AnyElement> = ModifierSlot::MULTIPLIERS
            .into_iter()
            .map(|slot| {
                self.render_slot_row(slot, store, controls.label(LabelId::Slot(slot)))
                    .into_any_element()
            })
            .collect();

        let draw_checked = controls.checked(ModifierSlot::DrawZeroValues);
        let on_draw = {
            let controller = self.controller.clone();
            move |checked: bool, _window: &mut gpui::Window, cx: &mut gpui::App| {
                controller.set_draw_zero_values(checked, cx)
            }
        };
        let submit = {
            let controller = self.controller.clone();
            move |_event: &ClickEvent, _window: &mut gpui::Window, cx: &mut gpui::App| controller.submit(cx)
        };
        let reset = {
            let controller = self.controller.clone();
            move |_event: &ClickEvent, _window: &mut gpui::Window, cx: &mut gpui::App| controller.reset(cx)
        };

        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(section_label("Vehicle type multipliers"))
            .children(multipliers)
            .child(section_label("Engine type distribution"))
            .child(self.render_slot_row(ModifierSlot::PetrolShare, store, None))
            .child(
                div()
                    .flex()
                    .justify_between()
                    .text_sm()
                    .text_color(MdtColors::text_secondary())
                    .child(format!(
                        "Petrol {}",
                        controls.label(LabelId::Slot(ModifierSlot::PetrolShare)).unwrap_or_default()
                    ))
                    .child(format!("Diesel {}", controls.label(LabelId::Diesel).unwrap_or_default())),
            )
            .child(section_label("Drawing"))
            .child(self.render_slot_row(ModifierSlot::LowerBound, store, Some("%".to_string())))
            .child(self.render_slot_row(ModifierSlot::UpperBound, store, Some("%".to_string())))
            .when(store.live().bounds_inverted(), |el| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(MdtColors::warning())
                        .child("Lower bound is above the upper bound"),
                )
            })
            .child(self.render_slot_row(ModifierSlot::Temperature, store, Some("°C".to_string())))
            .child(
                Checkbox::new("draw")
                    .checked(draw_checked)
                    .label(ModifierSlot::DrawZeroValues.label())
                    .on_change(on_draw),
            )
            .child(
                div()
                    .pt_2()
                    .flex()
                    .gap_2()
                    .justify_center()
                    .child(Button::primary("submit-btn", "Make Changes").on_click(submit))
                    .child(Button::secondary("reset-btn", "Reset").on_click(reset)),
            )
    }
}

fn section_label(text: &'static str) -> impl IntoElement {
    div()
        .pt_1()
        .text_xs()
        .font_weight(gpui::FontWeight::MEDIUM)
        .text_color(MdtColors::text_muted())
        .child(text)
}

impl Render for MapPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let store = self.entities.parameters.read(cx).clone();
        let panels = self.entities.panels.read(cx).clone();
        let loader = self.entities.inspector.read(cx).clone();
        let view = self.entities.navigation.read(cx).map_view();

        let overview = self.render_overview(view, &store, cx).into_any_element();
        let inspector = self.render_inspector(&loader, &panels, cx);
        let sidebar_visible = panels.sidebar().is_visible();
        let show_sidebar = panels.sidebar().affordances().show;

        div()
            .size_full()
            .flex()
            .flex_row()
            .overflow_hidden()
            .child(overview)
            .children(inspector)
            .when(sidebar_visible, |el| {
                el.child(self.render_sidebar(view, &store, &panels, cx))
            })
            .when(show_sidebar, |el| {
                el.child(
                    div().p_2().child(
                        Button::secondary("sidebar-btn-show", "‹")
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.toggle_sidebar(cx);
                            })),
                    ),
                )
            })
    }
}
