//! NavigationState - Loading Overlay and Delayed Navigation

use std::time::Duration;

use reqwest::Url;
use tracing::info;

use crate::constants::{MODIFYING_MESSAGE, NAVIGATION_DELAY_MS};
use crate::domain::encoding::EncodedParams;
use crate::domain::endpoints::{Endpoints, ViewTarget};
use crate::error::Result;

/// Full-window loading overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingOverlay {
    pub visible: bool,
    pub message: String,
}

/// Navigation to run after the overlay had time to fade in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCommand {
    pub url: Url,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct NavigationGate {
    overlay: LoadingOverlay,
    /// Map page the sidebar mirrors
    map_view: ViewTarget,
}

impl Default for NavigationGate {
    fn default() -> Self {
        Self {
            overlay: LoadingOverlay::default(),
            map_view: ViewTarget::Emissions,
        }
    }
}

impl NavigationGate {
    pub fn overlay(&self) -> &LoadingOverlay {
        &self.overlay
    }

    pub fn map_view(&self) -> ViewTarget {
        self.map_view
    }

    /// Show the overlay and schedule navigation to a named view.
    /// There is no way to cancel it.
    pub fn navigate(&mut self, target: ViewTarget, endpoints: &Endpoints) -> Result<NavigationCommand> {
        let url = endpoints.view(target)?;
        if matches!(target, ViewTarget::Flow | ViewTarget::Emissions) {
            self.map_view = target;
        }
        self.show(target.loading_message());
        info!("Navigating to {url}");
        Ok(NavigationCommand {
            url,
            delay: Duration::from_millis(NAVIGATION_DELAY_MS),
        })
    }

    /// Download URL for the committed parameters, followed immediately
    pub fn trigger_download(
        &self,
        archive: &str,
        endpoints: &Endpoints,
        params: &EncodedParams,
    ) -> Result<Url> {
        let url = endpoints.download(archive, params)?;
        info!("Downloading {url}");
        Ok(url)
    }

    /// Overlay shown while the edit form is being applied
    pub fn show_modifying(&mut self) {
        self.show(MODIFYING_MESSAGE);
    }

    pub fn is_modifying(&self) -> bool {
        self.overlay.visible && self.overlay.message == MODIFYING_MESSAGE
    }

    /// Hide the overlay once the navigation was handed off
    pub fn finish(&mut self) {
        self.overlay.visible = false;
    }

    fn show(&mut self, message: &str) {
        self.overlay = LoadingOverlay {
            visible: true,
            message: message.to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::encoding::encode;
    use crate::domain::modifiers::ParameterSnapshot;

    fn endpoints() -> Endpoints {
        Endpoints::parse("http://localhost:8000").expect("endpoints")
    }

    #[test]
    fn test_navigate_shows_overlay_and_delays() {
        let mut gate = NavigationGate::default();
        let command = gate.navigate(ViewTarget::Flow, &endpoints()).expect("navigate");
        assert_eq!(command.url.as_str(), "http://localhost:8000/flow/");
        assert_eq!(command.delay, Duration::from_millis(500));
        assert!(gate.overlay().visible);
        assert_eq!(gate.overlay().message, "Loading Flow Map");
        assert_eq!(gate.map_view(), ViewTarget::Flow);

        gate.finish();
        assert!(!gate.overlay().visible);
    }

    #[test]
    fn test_non_map_views_keep_map_view() {
        let mut gate = NavigationGate::default();
        gate.navigate(ViewTarget::Create, &endpoints()).expect("navigate");
        assert_eq!(gate.map_view(), ViewTarget::Emissions);
        assert!(!gate.is_modifying());
    }

    #[test]
    fn test_download_has_no_overlay() {
        let gate = NavigationGate::default();
        let params = encode(&ParameterSnapshot::default());
        let url = gate
            .trigger_download("network.zip", &endpoints(), &params)
            .expect("download");
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/download/network.zip/1,1,1,1,1,65.1,10,true,0,100"
        );
        assert!(!gate.overlay().visible);
    }

    #[test]
    fn test_modifying_message() {
        let mut gate = NavigationGate::default();
        gate.show_modifying();
        assert_eq!(gate.overlay().message, "Modifying the network...");
        assert!(gate.is_modifying());
        gate.finish();
        assert!(!gate.is_modifying());
    }
}
