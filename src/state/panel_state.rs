//! PanelState - Collapsible Panels, About Overlay and Sidebar

use std::collections::HashMap;

use crate::domain::endpoints::ViewTarget;

/// Every collapsible panel of the map sidebar and the inspector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKey {
    SegmentEditor,
    Legend,
    EmissionsGraph,
    FlowGraph,
    SpeedGraph,
    WorstSegments,
    AveragesTable,
    EmissionsTable,
    FlowTable,
    SpeedTable,
    Export,
    SegmentMap,
    SegmentCharacteristics,
    SegmentFlowGraph,
    SegmentEmissionsGraph,
    SegmentVehicleMix,
    SegmentFlowTable,
    SegmentSpeedTable,
    SegmentEmissionsTable,
}

impl PanelKey {
    pub const ALL: [PanelKey; 19] = [
        PanelKey::SegmentEditor,
        PanelKey::Legend,
        PanelKey::EmissionsGraph,
        PanelKey::FlowGraph,
        PanelKey::SpeedGraph,
        PanelKey::WorstSegments,
        PanelKey::AveragesTable,
        PanelKey::EmissionsTable,
        PanelKey::FlowTable,
        PanelKey::SpeedTable,
        PanelKey::Export,
        PanelKey::SegmentMap,
        PanelKey::SegmentCharacteristics,
        PanelKey::SegmentFlowGraph,
        PanelKey::SegmentEmissionsGraph,
        PanelKey::SegmentVehicleMix,
        PanelKey::SegmentFlowTable,
        PanelKey::SegmentSpeedTable,
        PanelKey::SegmentEmissionsTable,
    ];

    /// Element id used by the server-rendered pages
    pub fn dom_id(&self) -> &'static str {
        match self {
            PanelKey::SegmentEditor => "edit-table",
            PanelKey::Legend => "legend-graph",
            PanelKey::EmissionsGraph => "em-graph",
            PanelKey::FlowGraph => "fl-graph",
            PanelKey::SpeedGraph => "sp-graph",
            PanelKey::WorstSegments => "wst-table",
            PanelKey::AveragesTable => "av-table",
            PanelKey::EmissionsTable => "em-table",
            PanelKey::FlowTable => "fl-table",
            PanelKey::SpeedTable => "sp-table",
            PanelKey::Export => "dwn-table",
            PanelKey::SegmentMap => "map-table",
            PanelKey::SegmentCharacteristics => "char-table",
            PanelKey::SegmentFlowGraph => "rd-fl-graph",
            PanelKey::SegmentEmissionsGraph => "rd-em-graph",
            PanelKey::SegmentVehicleMix => "rd-pie-graph",
            PanelKey::SegmentFlowTable => "rd-fl-table",
            PanelKey::SegmentSpeedTable => "rd-sp-table",
            PanelKey::SegmentEmissionsTable => "rd-em-table",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelKey::SegmentEditor => "Segment Editor",
            PanelKey::Legend => "Map Legend",
            PanelKey::EmissionsGraph => "Average Hourly Segment Emissions",
            PanelKey::FlowGraph => "Average Segment Traffic Flow Rate",
            PanelKey::SpeedGraph => "Average Vehicle Speed",
            PanelKey::WorstSegments => "Show Worst Segments",
            PanelKey::AveragesTable => "Daily Average",
            PanelKey::EmissionsTable => "Emissions Data",
            PanelKey::FlowTable => "Flow Rate Data",
            PanelKey::SpeedTable => "Speed Data",
            PanelKey::Export => "Export Network",
            PanelKey::SegmentMap => "Segment Map",
            PanelKey::SegmentCharacteristics => "Characteristics",
            PanelKey::SegmentFlowGraph => "Flow",
            PanelKey::SegmentEmissionsGraph => "Emissions",
            PanelKey::SegmentVehicleMix => "Vehicle Mix",
            PanelKey::SegmentFlowTable => "Hourly Flow Rate",
            PanelKey::SegmentSpeedTable => "Hourly Average Speeds",
            PanelKey::SegmentEmissionsTable => "Hourly CO2 Emissions",
        }
    }

    /// Visibility the page declares before any toggle
    pub fn initial_visibility(&self) -> Visibility {
        match self {
            PanelKey::SegmentEditor
            | PanelKey::Legend
            | PanelKey::EmissionsGraph
            | PanelKey::FlowGraph
            | PanelKey::SpeedGraph
            | PanelKey::SegmentMap
            | PanelKey::SegmentCharacteristics
            | PanelKey::SegmentFlowGraph
            | PanelKey::SegmentEmissionsGraph
            | PanelKey::SegmentVehicleMix => Visibility::Visible,
            _ => Visibility::Hidden,
        }
    }

    pub fn is_inspector_panel(&self) -> bool {
        matches!(
            self,
            PanelKey::SegmentMap
                | PanelKey::SegmentCharacteristics
                | PanelKey::SegmentFlowGraph
                | PanelKey::SegmentEmissionsGraph
                | PanelKey::SegmentVehicleMix
                | PanelKey::SegmentFlowTable
                | PanelKey::SegmentSpeedTable
                | PanelKey::SegmentEmissionsTable
        )
    }

    /// Sidebar panels shown on a map page, in page order
    pub fn sidebar_panels(target: ViewTarget) -> Vec<PanelKey> {
        let (graphs, tables): (&[PanelKey], &[PanelKey]) = match target {
            ViewTarget::Flow => (
                &[PanelKey::SpeedGraph, PanelKey::FlowGraph],
                &[PanelKey::AveragesTable, PanelKey::FlowTable, PanelKey::SpeedTable],
            ),
            _ => (
                &[PanelKey::EmissionsGraph, PanelKey::FlowGraph],
                &[
                    PanelKey::AveragesTable,
                    PanelKey::EmissionsTable,
                    PanelKey::FlowTable,
                    PanelKey::SpeedTable,
                ],
            ),
        };

        let mut panels = vec![PanelKey::SegmentEditor, PanelKey::Legend];
        panels.extend_from_slice(graphs);
        panels.push(PanelKey::WorstSegments);
        panels.extend_from_slice(tables);
        panels.push(PanelKey::Export);
        panels
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// The "show" and "hide" buttons a panel owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub show: bool,
    pub hide: bool,
}

impl Affordances {
    fn for_visibility(visibility: Visibility) -> Self {
        Self {
            show: !visibility.is_visible(),
            hide: visibility.is_visible(),
        }
    }
}

/// One collapsible region and its two affordances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    visibility: Visibility,
    affordances: Affordances,
}

impl Panel {
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            affordances: Affordances::for_visibility(visibility),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn affordances(&self) -> Affordances {
        self.affordances
    }

    fn toggle(&mut self) -> Visibility {
        self.visibility = self.visibility.flipped();
        self.affordances = Affordances::for_visibility(self.visibility);
        self.visibility
    }
}

/// Display style of the about overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayDisplay {
    #[default]
    Unset,
    Block,
    None,
}

impl OverlayDisplay {
    pub fn is_shown(self) -> bool {
        self == OverlayDisplay::Block
    }
}

/// State of every panel in the window
#[derive(Debug, Clone)]
pub struct PanelState {
    panels: HashMap<PanelKey, Panel>,
    overlay: OverlayDisplay,
    sidebar: Panel,
}

impl Default for PanelState {
    fn default() -> Self {
        let panels = PanelKey::ALL
            .into_iter()
            .map(|key| (key, Panel::new(key.initial_visibility())))
            .collect();
        Self {
            panels,
            overlay: OverlayDisplay::Unset,
            sidebar: Panel::new(Visibility::Visible),
        }
    }
}

impl PanelState {
    pub fn panel(&self, key: PanelKey) -> Panel {
        self.panels
            .get(&key)
            .copied()
            .unwrap_or_else(|| Panel::new(key.initial_visibility()))
    }

    pub fn is_visible(&self, key: PanelKey) -> bool {
        self.panel(key).is_visible()
    }

    /// Flip one panel and swap its affordances
    pub fn toggle(&mut self, key: PanelKey) -> Visibility {
        self.panels
            .entry(key)
            .or_insert_with(|| Panel::new(key.initial_visibility()))
            .toggle()
    }

    /// Show the about overlay when hidden or unset, hide it otherwise
    pub fn toggle_overlay(&mut self) -> OverlayDisplay {
        self.overlay = match self.overlay {
            OverlayDisplay::Unset | OverlayDisplay::None => OverlayDisplay::Block,
            OverlayDisplay::Block => OverlayDisplay::None,
        };
        self.overlay
    }

    pub fn overlay(&self) -> OverlayDisplay {
        self.overlay
    }

    pub fn toggle_sidebar(&mut self) -> Visibility {
        self.sidebar.toggle()
    }

    pub fn sidebar(&self) -> Panel {
        self.sidebar
    }

    /// Restore the inspector sub-panels to their declared state, as a freshly
    /// loaded fragment would
    pub fn reset_inspector_panels(&mut self) {
        for key in PanelKey::ALL.into_iter().filter(PanelKey::is_inspector_panel) {
            self.panels.insert(key, Panel::new(key.initial_visibility()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_visibility_follows_page() {
        let state = PanelState::default();
        assert!(state.is_visible(PanelKey::SegmentEditor));
        assert!(state.is_visible(PanelKey::Legend));
        assert!(!state.is_visible(PanelKey::WorstSegments));
        assert!(!state.is_visible(PanelKey::Export));
        assert!(!state.is_visible(PanelKey::SegmentFlowTable));

        let editor = state.panel(PanelKey::SegmentEditor).affordances();
        assert_eq!(editor, Affordances { show: false, hide: true });
        let export = state.panel(PanelKey::Export).affordances();
        assert_eq!(export, Affordances { show: true, hide: false });
    }

    #[test]
    fn test_toggle_twice_restores_every_panel() {
        for key in PanelKey::ALL {
            let mut state = PanelState::default();
            let before = state.panel(key);
            state.toggle(key);
            assert_ne!(state.panel(key), before, "{}", key.dom_id());
            state.toggle(key);
            assert_eq!(state.panel(key), before, "{}", key.dom_id());
        }
    }

    #[test]
    fn test_toggle_swaps_affordances_only_for_that_panel() {
        let mut state = PanelState::default();
        assert_eq!(state.toggle(PanelKey::WorstSegments), Visibility::Visible);
        assert_eq!(
            state.panel(PanelKey::WorstSegments).affordances(),
            Affordances { show: false, hide: true }
        );
        assert!(!state.is_visible(PanelKey::Export));
        assert!(state.is_visible(PanelKey::Legend));
    }

    #[test]
    fn test_overlay_cycles_from_unset() {
        let mut state = PanelState::default();
        assert_eq!(state.overlay(), OverlayDisplay::Unset);
        assert_eq!(state.toggle_overlay(), OverlayDisplay::Block);
        assert_eq!(state.toggle_overlay(), OverlayDisplay::None);
        assert_eq!(state.toggle_overlay(), OverlayDisplay::Block);
    }

    #[test]
    fn test_sidebar_affordances() {
        let mut state = PanelState::default();
        assert_eq!(state.toggle_sidebar(), Visibility::Hidden);
        assert!(state.sidebar().affordances().show);
        assert!(!state.sidebar().affordances().hide);
        assert_eq!(state.toggle_sidebar(), Visibility::Visible);
    }

    #[test]
    fn test_reset_inspector_panels() {
        let mut state = PanelState::default();
        state.toggle(PanelKey::SegmentMap);
        state.toggle(PanelKey::SegmentSpeedTable);
        state.toggle(PanelKey::Export);
        state.reset_inspector_panels();
        assert!(state.is_visible(PanelKey::SegmentMap));
        assert!(!state.is_visible(PanelKey::SegmentSpeedTable));
        assert!(state.is_visible(PanelKey::Export));
    }

    #[test]
    fn test_sidebar_panels_per_page() {
        let flow = PanelKey::sidebar_panels(ViewTarget::Flow);
        assert!(flow.contains(&PanelKey::SpeedGraph));
        assert!(!flow.contains(&PanelKey::EmissionsGraph));
        let emissions = PanelKey::sidebar_panels(ViewTarget::Emissions);
        assert_eq!(emissions.first(), Some(&PanelKey::SegmentEditor));
        assert_eq!(emissions.last(), Some(&PanelKey::Export));
    }
}
