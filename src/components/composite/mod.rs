//! Composite Components
//!
//! Larger building blocks assembled from primitives.

pub mod loading_overlay;
pub mod modal;
pub mod panel;
