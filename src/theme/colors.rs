//! Colors - MDT Theme Colors

use gpui::{rgb, rgba, Rgba};

use crate::state::log_state::LogLevel;

/// MDT color palette, accessed via associated functions
pub struct MdtColors;

impl MdtColors {
    // Primary colors
    /// Header background - Dark slate
    pub fn header_bg() -> Rgba { rgb(0x1e293b) }
    /// Primary accent - Green (submit actions)
    pub fn accent() -> Rgba { rgb(0x16a34a) }
    /// Secondary accent - Blue (links, checked boxes)
    pub fn accent_blue() -> Rgba { rgb(0x2563eb) }

    // Background colors
    pub fn background() -> Rgba { rgb(0xf1f5f9) }
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    pub fn sidebar_bg() -> Rgba { rgb(0xf8fafc) }
    /// Collapsible panel header
    pub fn panel_header_bg() -> Rgba { rgb(0xe2e8f0) }
    pub fn log_panel_bg() -> Rgba { rgb(0x0f172a) }
    /// Loading and about overlays
    pub fn overlay_bg() -> Rgba { rgba(0x0f172acc) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x1e293b) }
    pub fn text_secondary() -> Rgba { rgb(0x64748b) }
    pub fn text_muted() -> Rgba { rgb(0x94a3b8) }
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    pub fn success() -> Rgba { rgb(0x22c55e) }
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    pub fn danger() -> Rgba { rgb(0xef4444) }
    pub fn debug() -> Rgba { rgb(0x6b7280) }

    // Border colors
    pub fn border() -> Rgba { rgb(0xcbd5e1) }

    // Button colors
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    pub fn button_primary_hover() -> Rgba { rgb(0x15803d) }
    pub fn button_secondary_bg() -> Rgba { rgb(0xe2e8f0) }
    pub fn button_secondary_hover() -> Rgba { rgb(0xcbd5e1) }
    pub fn button_ghost_hover() -> Rgba { rgba(0xffffff22) }

    // Input colors
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_border() -> Rgba { rgb(0xcbd5e1) }

    /// Text color of a log level in the log panel
    pub fn log_level(level: LogLevel) -> Rgba {
        match level {
            LogLevel::Info => Self::success(),
            LogLevel::Warn => Self::warning(),
            LogLevel::Error => Self::danger(),
            LogLevel::Debug => Self::debug(),
        }
    }
}
