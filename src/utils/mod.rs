//! Utilities - Formatting and Local Storage

pub mod config_store;
pub mod format;
