//! Map Feature
//!
//! Segment editor, inspector and sidebar panels of the flow and emissions maps.

pub mod about;
pub mod controller;
pub mod page;
