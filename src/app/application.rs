//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use tracing::error;

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::eventing::app_event::event_channel;
use crate::services::{FragmentSource, ServiceHub};
use crate::state::config_state::ConfigState;
use crate::state::parameter_store::ParameterStore;

actions!(mdt, [Quit]);

/// Run the explorer window until it is closed
pub fn run_app(config: ConfigState, parameters: ParameterStore, source: Arc<dyn FragmentSource>) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let timeout = config.request_timeout();
        let entities = AppEntities::init(config, parameters, cx);
        cx.set_global(entities.clone());

        // Service -> UI channel, drained by the workspace
        let (event_tx, event_rx) = event_channel();
        cx.set_global(ServiceHub::new(event_tx, source, timeout));

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("MDT Explorer")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, cx))
        }) {
            error!("Failed to open window: {e:#}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
