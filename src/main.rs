//! MDT Explorer - Main Entry Point
//!
//! Native client for the Manchester Digital Twin traffic and emissions server.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use mdt_explorer::app::application::run_app;
use mdt_explorer::constants::CONFIG_FILE;
use mdt_explorer::domain::config::{AppConfig, LoggingConfig};
use mdt_explorer::services::{runtime::init_runtime, HttpFragmentClient};
use mdt_explorer::state::config_state::ConfigState;
use mdt_explorer::state::parameter_store::ParameterStore;
use mdt_explorer::utils::config_store::{
    app_config_dir, app_data_dir, load_app_config, load_last_modifiers, save_toml,
};

/// Console logging, plus a daily file in the data directory when enabled.
/// The returned guard flushes the file writer and must outlive the app.
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
    };

    let (file_layer, guard) = match logging.file.then(app_data_dir) {
        Some(Ok(dir)) => {
            let appender = tracing_appender::rolling::daily(dir, "mdt-explorer.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(filter()))
        .with(file_layer)
        .init();

    guard
}

fn load_config() -> (AppConfig, Option<String>) {
    match load_app_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(format!("{e:#}"))),
    }
}

/// Write the defaults on first start so there is a file to edit
fn write_default_config(config: &AppConfig) {
    let Ok(dir) = app_config_dir() else {
        return;
    };
    if dir.join(CONFIG_FILE).exists() {
        return;
    }
    if let Err(e) = save_toml(&dir, CONFIG_FILE, config) {
        warn!("Could not write default config: {e:#}");
    }
}

fn main() -> anyhow::Result<()> {
    let (config, config_error) = load_config();
    let _guard = init_tracing(&config.logging);

    info!("Starting MDT Explorer...");
    if let Some(e) = config_error {
        warn!("Using default configuration: {e}");
    } else {
        write_default_config(&config);
    }

    let config = match ConfigState::new(config) {
        Ok(state) => state,
        Err(e) => {
            warn!("Invalid server configuration ({e}), using defaults");
            ConfigState::new(AppConfig::default()).context("default configuration")?
        }
    };

    let mut parameters = ParameterStore::default();
    parameters.initialize_from_controls();
    match load_last_modifiers() {
        Ok(Some(snapshot)) => {
            info!("Restoring last applied modifiers");
            parameters.restore(snapshot);
        }
        Ok(None) => {}
        Err(e) => warn!("Could not load last modifiers: {e:#}"),
    }

    init_runtime().context("starting tokio runtime")?;
    let source = HttpFragmentClient::new(config.request_timeout()).context("building HTTP client")?;

    run_app(config, parameters, Arc::new(source));
    Ok(())
}
