//! Workspace - Main Shell with Layout and Event Pump
//!
//! Holds the header, the map page and the log panel, layers the instructions
//! overlay and the loading overlay on top, and drains service events into the
//! state entities.

use futures::StreamExt;
use gpui::{div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::composite::loading_overlay::LoadingOverlay;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::eventing::app_event::{AppEvent, EventReceiver};
use crate::features::map::about::about_modal;
use crate::features::map::controller::MapController;
use crate::features::map::page::MapPage;
use crate::state::inspector_state::Completion;
use crate::state::log_state::LogLevel;
use crate::theme::colors::MdtColors;

pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    map_page: Entity<MapPage>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(entities: AppEntities, event_rx: EventReceiver, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let map_page = cx.new(|cx| MapPage::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        Self::start_event_pump(event_rx, entities.clone(), cx);

        // Overlays live here
        cx.observe(&entities.panels, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            map_page,
            log_panel,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(mut event_rx: EventReceiver, entities: AppEntities, cx: &mut Context<Self>) {
        cx.spawn(async move |_this, cx| {
            while let Some(event) = event_rx.next().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
            debug!("Event channel closed");
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let about_shown = self.entities.panels.read(cx).overlay().is_shown();
        let overlay = self.entities.navigation.read(cx).overlay().clone();
        let controller = MapController::new(self.entities.clone());

        div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(MdtColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.map_page.clone()),
            )
            .child(self.log_panel.clone())
            .when(about_shown, |el| el.child(about_modal(controller)))
            .when(overlay.visible, |el| el.child(LoadingOverlay::new(overlay.message)))
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::InspectorFetched { generation, result } => {
            let (completion, failure) = entities.inspector.update(cx, |loader, cx| {
                let completion = loader.complete_fetch(generation, result);
                cx.notify();
                (completion, loader.slot().failure.clone())
            });
            if completion == Completion::Stale {
                return;
            }

            // A refresh after submitting the editor ends the modifying overlay
            entities.navigation.update(cx, |gate, cx| {
                if gate.is_modifying() {
                    gate.finish();
                    cx.notify();
                }
            });
            if let Some(message) = failure {
                entities.logs.update(cx, |logs, cx| {
                    logs.push_now(LogLevel::Error, message);
                    cx.notify();
                });
            }
        }
        AppEvent::InspectorClosed { generation } => {
            let completion = entities.inspector.update(cx, |loader, cx| {
                let completion = loader.complete_close(generation);
                cx.notify();
                completion
            });
            // The refresh the overlay waited for was superseded by the close
            if completion == Completion::Applied {
                entities.navigation.update(cx, |gate, cx| {
                    if gate.is_modifying() {
                        gate.finish();
                        cx.notify();
                    }
                });
            }
        }
        AppEvent::NavigationReady { url } => {
            cx.open_url(url.as_str());
            entities.navigation.update(cx, |gate, cx| {
                gate.finish();
                cx.notify();
            });
        }
    }
}
