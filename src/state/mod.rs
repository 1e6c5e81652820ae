//! State - GUI-Free State Machines
//!
//! Each module owns one piece of window state. None of them touch GPUI or
//! tokio; anything asynchronous is returned as a command for the service layer
//! to resolve, so every transition can be driven directly from tests.

pub mod config_state;
pub mod controls;
pub mod inspector_state;
pub mod log_state;
pub mod navigation_state;
pub mod panel_state;
pub mod parameter_store;
