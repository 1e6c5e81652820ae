//! Domain - Pure Data Structures and Wire Types
//!
//! These types don't depend on GPUI and represent the modifier snapshot,
//! its wire format, and the server endpoints it is sent to.

pub mod config;
pub mod encoding;
pub mod endpoints;
pub mod modifiers;
