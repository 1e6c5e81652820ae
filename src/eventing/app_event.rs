//! AppEvent - Service to UI Events
//!
//! Everything the tokio side reports back to the window travels as an
//! [`AppEvent`] over an unbounded channel drained by the workspace.

use chrono::{DateTime, Local};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use reqwest::Url;

use crate::error::Result;
use crate::state::log_state::LogLevel;

pub type EventSender = UnboundedSender<AppEvent>;
pub type EventReceiver = UnboundedReceiver<AppEvent>;

pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded()
}

#[derive(Debug)]
pub enum AppEvent {
    /// Line for the log panel
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// An inspector fetch ticket resolved
    InspectorFetched {
        generation: u64,
        result: Result<String>,
    },

    /// An inspector close ticket elapsed
    InspectorClosed { generation: u64 },

    /// A delayed navigation is due
    NavigationReady { url: Url },
}

impl AppEvent {
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }
}
