//! Map Controller
//!
//! Every user action on the map window goes through here. The controller asks
//! the state machines what to do, hands the resulting commands to the
//! [`ServiceHub`] and records anything user-visible in the log panel.

use gpui::App;
use tracing::warn;

use crate::app::entities::AppEntities;
use crate::domain::endpoints::{SubjectId, ViewTarget};
use crate::domain::modifiers::ModifierSlot;
use crate::error::Error;
use crate::services::ServiceHub;
use crate::state::log_state::LogLevel;
use crate::state::panel_state::PanelKey;
use crate::state::parameter_store::InputValue;
use crate::utils::config_store::save_last_modifiers;

#[derive(Clone)]
pub struct MapController {
    entities: AppEntities,
}

impl MapController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    fn log(&self, level: LogLevel, message: impl Into<String>, cx: &mut App) {
        self.entities.logs.update(cx, |logs, cx| {
            logs.push_now(level, message);
            cx.notify();
        });
    }

    fn report(&self, error: Error, cx: &mut App) {
        let level = match error {
            Error::InvalidModifier { .. } => LogLevel::Warn,
            _ => LogLevel::Error,
        };
        self.log(level, error.to_string(), cx);
    }

    // ==================== Segment editor ====================

    /// Move a numeric modifier by whole steps
    pub fn nudge(&self, slot: ModifierSlot, steps: i32, cx: &mut App) {
        let result = self.entities.parameters.update(cx, |store, cx| {
            let result = store.nudge(slot, steps);
            cx.notify();
            result
        });
        if let Err(e) = result {
            self.report(e, cx);
        }
    }

    pub fn set_draw_zero_values(&self, checked: bool, cx: &mut App) {
        let result = self.entities.parameters.update(cx, |store, cx| {
            let result = store.on_input(ModifierSlot::DrawZeroValues, InputValue::Checked(checked));
            cx.notify();
            result
        });
        if let Err(e) = result {
            self.report(e, cx);
        }
    }

    /// Commit the edited modifiers and reload what depends on them
    pub fn submit(&self, cx: &mut App) {
        let (encoded, snapshot) = self.entities.parameters.update(cx, |store, cx| {
            let encoded = store.commit();
            cx.notify();
            (encoded, *store.committed())
        });

        if let Err(e) = save_last_modifiers(&encoded) {
            warn!("Failed to persist modifiers: {e:#}");
            self.log(LogLevel::Warn, format!("Modifiers not saved: {e}"), cx);
        }
        if snapshot.bounds_inverted() {
            self.log(
                LogLevel::Warn,
                "Lower display bound is above the upper bound",
                cx,
            );
        }
        self.log(LogLevel::Info, format!("Network modified: {encoded}"), cx);

        let subject = self.entities.inspector.read(cx).current_subject();
        if let Some(subject) = subject {
            self.entities.navigation.update(cx, |gate, cx| {
                gate.show_modifying();
                cx.notify();
            });
            self.inspect(subject, cx);
        }
    }

    /// Restore the defaults in the editor without committing them
    pub fn reset(&self, cx: &mut App) {
        self.entities.parameters.update(cx, |store, cx| {
            store.reset();
            cx.notify();
        });
        self.log(LogLevel::Info, "Editor reset to defaults (not applied)", cx);
    }

    // ==================== Inspector ====================

    /// Inspect a segment; the sentinel closes the inspector
    pub fn inspect(&self, subject: SubjectId, cx: &mut App) {
        let params = self.entities.parameters.read(cx).encoded();
        let endpoints = self.entities.config.read(cx).endpoints().clone();

        let command = self.entities.inspector.update(cx, |loader, cx| {
            let command = loader.request(subject, &endpoints, &params);
            cx.notify();
            command
        });

        match command {
            Ok(command) => {
                if !subject.is_none() {
                    self.entities.panels.update(cx, |panels, cx| {
                        panels.reset_inspector_panels();
                        cx.notify();
                    });
                }
                if let Some(hub) = cx.try_global::<ServiceHub>() {
                    hub.schedule_inspector(command);
                }
            }
            Err(e) => self.report(e, cx),
        }
    }

    pub fn close_inspector(&self, cx: &mut App) {
        self.inspect(SubjectId::NONE, cx);
    }

    pub fn dismiss_inspector_failure(&self, cx: &mut App) {
        self.entities.inspector.update(cx, |loader, cx| {
            loader.dismiss_failure();
            cx.notify();
        });
    }

    // ==================== Navigation ====================

    /// Show the loading overlay, then open the view in the browser
    pub fn navigate(&self, target: ViewTarget, cx: &mut App) {
        let endpoints = self.entities.config.read(cx).endpoints().clone();
        let command = self.entities.navigation.update(cx, |gate, cx| {
            let command = gate.navigate(target, &endpoints);
            cx.notify();
            command
        });

        match command {
            Ok(command) => {
                if let Some(hub) = cx.try_global::<ServiceHub>() {
                    hub.schedule_navigation(command);
                }
            }
            Err(e) => self.report(e, cx),
        }
    }

    /// Download the network for the committed modifiers
    pub fn download(&self, cx: &mut App) {
        let params = self.entities.parameters.read(cx).encoded();
        let config = self.entities.config.read(cx);
        let endpoints = config.endpoints().clone();
        let archive = config.archive_name().to_string();

        let url = self
            .entities
            .navigation
            .read(cx)
            .trigger_download(&archive, &endpoints, &params);
        match url {
            Ok(url) => {
                cx.open_url(url.as_str());
                self.log(LogLevel::Info, format!("Downloading {archive}"), cx);
            }
            Err(e) => self.report(e, cx),
        }
    }

    // ==================== Panels ====================

    pub fn toggle_panel(&self, key: PanelKey, cx: &mut App) {
        self.entities.panels.update(cx, |panels, cx| {
            panels.toggle(key);
            cx.notify();
        });
    }

    pub fn toggle_about(&self, cx: &mut App) {
        self.entities.panels.update(cx, |panels, cx| {
            panels.toggle_overlay();
            cx.notify();
        });
    }

    pub fn toggle_sidebar(&self, cx: &mut App) {
        self.entities.panels.update(cx, |panels, cx| {
            panels.toggle_sidebar();
            cx.notify();
        });
    }
}
