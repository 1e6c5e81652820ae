//! Layout Components
//!
//! Header and log panel framing every page.

pub mod header;
pub mod log_panel;
