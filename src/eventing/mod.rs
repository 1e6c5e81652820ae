//! Eventing - Service to UI Channel

pub mod app_event;
