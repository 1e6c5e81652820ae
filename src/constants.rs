//! Application Constants
//!
//! Timing, defaults and layout constants shared across the application.

/// Delay between an inspect request and the fragment fetch (lets the slide transition run)
pub const INSPECTOR_DELAY_MS: u64 = 1000;

/// Delay between showing the loading overlay and navigating away
pub const NAVIGATION_DELAY_MS: u64 = 500;

/// Default upper bound for a single inspector fragment fetch
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default server base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default archive name offered by the export panel
pub const DEFAULT_ARCHIVE_NAME: &str = "network.zip";

/// Separator of the encoded modifier string
pub const MODIFIER_SEPARATOR: char = ',';

/// Number of modifier slots in a snapshot
pub const MODIFIER_COUNT: usize = 10;

/// Message shown on the loading overlay while the edit form is applied
pub const MODIFYING_MESSAGE: &str = "Modifying the network...";

/// Config file names inside the application config directory
pub const CONFIG_FILE: &str = "config.toml";
pub const MODIFIERS_FILE: &str = "modifiers.json";

/// Log ring buffer capacity
pub const LOG_CAPACITY: usize = 2000;

/// Sidebar width in pixels
pub const SIDEBAR_WIDTH: f32 = 340.0;

/// Inspector pane width in pixels
pub const INSPECTOR_WIDTH: f32 = 380.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
