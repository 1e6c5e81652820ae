//! Service Layer
//!
//! Everything that waits or talks to the server runs here, on tokio.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       ServiceHub                         │
//! │  ┌──────────────────┐ ┌───────────────┐ ┌─────────────┐  │
//! │  │ inspector_service│ │   navigator   │ │   runtime   │  │
//! │  │ (delay + fetch)  │ │ (delay)       │ │ (tokio)     │  │
//! │  └────────┬─────────┘ └───────────────┘ └─────────────┘  │
//! │           ▼                                              │
//! │   FragmentSource (HttpFragmentClient)                    │
//! └──────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼ AppEvent
//!                 workspace -> state entities
//! ```

pub mod fragment_client;
pub mod hub;
pub mod inspector_service;
pub mod navigator;
pub mod runtime;

pub use fragment_client::{FragmentSource, HttpFragmentClient};
pub use hub::ServiceHub;
