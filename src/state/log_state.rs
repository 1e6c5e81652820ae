//! LogState - User-Visible Activity Log
//!
//! Ring buffer behind the log panel. Failures pushed here double as the
//! visible failure indicator for inspector loads.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::constants::LOG_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => LogLevel::Error,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::INFO => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
    /// Errors not yet acknowledged in the log panel
    unseen_errors: usize,
    pub expanded: bool,
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(LOG_CAPACITY)
    }
}

impl LogState {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(256)),
            capacity: capacity.max(1),
            next_id: 1,
            unseen_errors: 0,
            expanded: false,
        }
    }

    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        });
        self.next_id += 1;

        if level == LogLevel::Error && !self.expanded {
            self.unseen_errors += 1;
        }
    }

    pub fn push_now(&mut self, level: LogLevel, message: impl Into<String>) {
        self.push(level, message, Local::now());
    }

    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn unseen_errors(&self) -> usize {
        self.unseen_errors
    }

    /// Most recent error entry, if any is still buffered
    pub fn last_error(&self) -> Option<&LogEntry> {
        self.entries.iter().rev().find(|e| e.level == LogLevel::Error)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.unseen_errors = 0;
    }

    /// Expanding the panel acknowledges pending errors
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
        if self.expanded {
            self.unseen_errors = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut log = LogState::new(3);
        for i in 0..5 {
            log.push_now(LogLevel::Info, format!("line {i}"));
        }
        assert_eq!(log.len(), 3);
        let first = log.entries().front().expect("entry");
        assert_eq!(first.message, "line 2");
        assert_eq!(first.id, 3);
    }

    #[test]
    fn test_errors_counted_until_expanded() {
        let mut log = LogState::default();
        log.push_now(LogLevel::Warn, "clamped");
        log.push_now(LogLevel::Error, "Failed to load segment 5");
        assert_eq!(log.unseen_errors(), 1);
        assert_eq!(
            log.last_error().map(|e| e.message.as_str()),
            Some("Failed to load segment 5")
        );

        log.toggle_expanded();
        assert_eq!(log.unseen_errors(), 0);
        log.push_now(LogLevel::Error, "again");
        assert_eq!(log.unseen_errors(), 0);
    }

    #[test]
    fn test_level_from_tracing() {
        assert_eq!(LogLevel::from(tracing::Level::WARN), LogLevel::Warn);
        assert_eq!(LogLevel::from(tracing::Level::TRACE), LogLevel::Debug);
    }
}
