//! MDT Explorer Library
//!
//! Native client for the Manchester Digital Twin traffic and emissions
//! server: an editor for the network modifiers, a segment inspector fed by
//! server-rendered fragments, and navigation to the server's map views.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
