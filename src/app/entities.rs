//! AppEntities - Global Entity Handles
//!
//! State is split by update frequency: slider input only re-renders views
//! observing `parameters`, inspector traffic only those observing `inspector`.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{
    config_state::ConfigState, inspector_state::InspectorLoader, log_state::LogState,
    navigation_state::NavigationGate, panel_state::PanelState, parameter_store::ParameterStore,
};

#[derive(Clone)]
pub struct AppEntities {
    /// Loaded configuration and server endpoints
    pub config: Entity<ConfigState>,
    /// Log panel ring buffer
    pub logs: Entity<LogState>,
    /// Live and committed modifiers with their controls
    pub parameters: Entity<ParameterStore>,
    /// Collapsible panels, about overlay, sidebar
    pub panels: Entity<PanelState>,
    /// Inspector slot
    pub inspector: Entity<InspectorLoader>,
    /// Loading overlay and delayed navigation
    pub navigation: Entity<NavigationGate>,
}

impl Global for AppEntities {}

impl AppEntities {
    pub fn init(config: ConfigState, parameters: ParameterStore, cx: &mut App) -> Self {
        Self {
            config: cx.new(|_| config),
            logs: cx.new(|_| LogState::default()),
            parameters: cx.new(|_| parameters),
            panels: cx.new(|_| PanelState::default()),
            inspector: cx.new(|_| InspectorLoader::default()),
            navigation: cx.new(|_| NavigationGate::default()),
        }
    }
}
