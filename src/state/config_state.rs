//! ConfigState - Loaded Configuration and Derived Endpoints

use std::time::Duration;

use crate::domain::config::AppConfig;
use crate::domain::endpoints::Endpoints;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ConfigState {
    pub config: AppConfig,
    endpoints: Endpoints,
}

impl ConfigState {
    /// Validate the base URL once so later URL building cannot fail on it
    pub fn new(config: AppConfig) -> Result<Self> {
        let endpoints = Endpoints::parse(&config.server.base_url)?;
        Ok(Self { config, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn archive_name(&self) -> &str {
        &self.config.download.archive_name
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.server.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ConfigState::new(AppConfig::default()).expect("default config");
        assert_eq!(state.endpoints().base().as_str(), "http://localhost:8000/");
        assert_eq!(state.archive_name(), "network.zip");
        assert_eq!(state.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        let mut config = AppConfig::default();
        config.server.base_url = "not a url".to_string();
        assert!(ConfigState::new(config).is_err());
    }
}
