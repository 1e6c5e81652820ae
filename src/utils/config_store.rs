//! ConfigStore - Local Configuration Storage
//!
//! Files live in the platform config directory:
//! - **Linux**: `~/.config/mdt-explorer/`
//! - **macOS**: `~/Library/Application Support/uk.ac.mdt.mdt-explorer/`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\mdt\mdt-explorer\config\`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, MODIFIERS_FILE};
use crate::domain::config::AppConfig;
use crate::domain::encoding::{decode, EncodedParams};
use crate::domain::modifiers::ParameterSnapshot;

/// Last committed modifiers, kept in wire form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedModifiers {
    pub modifiers: String,
    pub saved_at: DateTime<Local>,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("uk.ac", "mdt", "mdt-explorer")
        .ok_or_else(|| anyhow::anyhow!("Could not determine project directories"))
}

/// Get or create the application config directory
pub fn app_config_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.config_dir().to_path_buf();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Get or create the application data directory (log files)
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.data_local_dir().to_path_buf();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Load a TOML file, falling back to the default when it does not exist
pub fn load_toml<T: DeserializeOwned + Default>(dir: &Path, filename: &str) -> Result<T> {
    let path = dir.join(filename);
    if !path.exists() {
        return Ok(T::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Save a TOML file
pub fn save_toml<T: Serialize>(dir: &Path, filename: &str, value: &T) -> Result<()> {
    let content = toml::to_string_pretty(value)?;
    fs::write(dir.join(filename), content)?;
    Ok(())
}

/// Load a JSON file, `None` when it does not exist
pub fn load_json<T: DeserializeOwned>(dir: &Path, filename: &str) -> Result<Option<T>> {
    let path = dir.join(filename);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(value))
}

/// Save a JSON file
pub fn save_json<T: Serialize>(dir: &Path, filename: &str, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(dir.join(filename), content)?;
    Ok(())
}

/// Load `config.toml` from the application config directory
pub fn load_app_config() -> Result<AppConfig> {
    load_toml(&app_config_dir()?, CONFIG_FILE)
}

/// Load the last committed modifiers, if any were saved
pub fn load_last_modifiers() -> Result<Option<ParameterSnapshot>> {
    read_modifiers(&app_config_dir()?)
}

/// Persist the committed modifiers
pub fn save_last_modifiers(params: &EncodedParams) -> Result<()> {
    write_modifiers(&app_config_dir()?, params)
}

fn read_modifiers(dir: &Path) -> Result<Option<ParameterSnapshot>> {
    let Some(saved) = load_json::<SavedModifiers>(dir, MODIFIERS_FILE)? else {
        return Ok(None);
    };
    let snapshot = decode(&saved.modifiers)
        .with_context(|| format!("modifiers saved at {}", saved.saved_at.to_rfc3339()))?;
    Ok(Some(snapshot))
}

fn write_modifiers(dir: &Path, params: &EncodedParams) -> Result<()> {
    let saved = SavedModifiers {
        modifiers: params.to_string(),
        saved_at: Local::now(),
    };
    save_json(dir, MODIFIERS_FILE, &saved)
}
