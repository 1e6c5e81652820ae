//! InspectorState - Single-Slot Inspector Loader
//!
//! Lifecycle: `Closed -> Pending -> Loaded -> Closing -> Closed`.
//!
//! The loader never sleeps or fetches itself. Every request bumps a generation
//! counter and returns a ticket; the service layer resolves the ticket and
//! feeds the outcome back. Outcomes carrying an older generation are dropped,
//! so the most recently requested subject always wins.

use std::time::Duration;

use reqwest::Url;
use tracing::{debug, error, info};

use crate::constants::INSPECTOR_DELAY_MS;
use crate::domain::encoding::EncodedParams;
use crate::domain::endpoints::{Endpoints, SubjectId};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InspectorPhase {
    #[default]
    Closed,
    Pending,
    Loaded,
    Closing,
}

/// Fetch to perform once the delay elapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub subject: SubjectId,
    pub url: Url,
    pub delay: Duration,
}

/// Close to complete once the slide-out delay elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectorCommand {
    Fetch(FetchTicket),
    Close(CloseTicket),
}

impl InspectorCommand {
    pub fn generation(&self) -> u64 {
        match self {
            InspectorCommand::Fetch(ticket) => ticket.generation,
            InspectorCommand::Close(ticket) => ticket.generation,
        }
    }
}

/// Whether a completion changed the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// The single content slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectorSlot {
    pub visible: bool,
    pub content: String,
    /// Slide-out transition marker while closing
    pub sliding_out: bool,
    pub subject: Option<SubjectId>,
    /// Last fetch failure, kept until the next request
    pub failure: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InspectorLoader {
    phase: InspectorPhase,
    generation: u64,
    requested: Option<SubjectId>,
    slot: InspectorSlot,
    delay: Duration,
}

impl Default for InspectorLoader {
    fn default() -> Self {
        Self {
            phase: InspectorPhase::Closed,
            generation: 0,
            requested: None,
            slot: InspectorSlot::default(),
            delay: Duration::from_millis(INSPECTOR_DELAY_MS),
        }
    }
}

impl InspectorLoader {
    pub fn phase(&self) -> InspectorPhase {
        self.phase
    }

    pub fn slot(&self) -> &InspectorSlot {
        &self.slot
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Subject being loaded or shown
    pub fn current_subject(&self) -> Option<SubjectId> {
        match self.phase {
            InspectorPhase::Pending | InspectorPhase::Loaded => self.requested,
            InspectorPhase::Closed | InspectorPhase::Closing => None,
        }
    }

    /// Inspect `subject`, or close the slot for the sentinel
    pub fn request(
        &mut self,
        subject: SubjectId,
        endpoints: &Endpoints,
        params: &EncodedParams,
    ) -> Result<InspectorCommand> {
        if subject.is_none() {
            return Ok(self.close());
        }

        let url = endpoints.inspector(subject, params)?;
        self.generation += 1;
        self.phase = InspectorPhase::Pending;
        self.requested = Some(subject);
        self.slot.content.clear();
        self.slot.sliding_out = false;
        self.slot.failure = None;
        info!("Inspecting segment {subject}");
        debug!("Inspector fetch #{} scheduled: {url}", self.generation);

        Ok(InspectorCommand::Fetch(FetchTicket {
            generation: self.generation,
            subject,
            url,
            delay: self.delay,
        }))
    }

    /// Start the slide-out. Any scheduled fetch becomes stale.
    pub fn close(&mut self) -> InspectorCommand {
        self.generation += 1;
        self.phase = InspectorPhase::Closing;
        self.requested = None;
        self.slot.sliding_out = true;
        debug!("Inspector close #{} scheduled", self.generation);

        InspectorCommand::Close(CloseTicket {
            generation: self.generation,
            delay: self.delay,
        })
    }

    /// Apply the outcome of a fetch ticket
    pub fn complete_fetch(&mut self, generation: u64, outcome: Result<String>) -> Completion {
        if generation != self.generation || self.phase != InspectorPhase::Pending {
            debug!(
                "Dropping stale inspector fetch #{generation} (current #{})",
                self.generation
            );
            return Completion::Stale;
        }

        let outcome = outcome.and_then(|html| {
            if html.trim().is_empty() {
                Err(Error::EmptyFragment {
                    url: self
                        .requested
                        .map(|s| format!("inspector/{s}"))
                        .unwrap_or_default(),
                })
            } else {
                Ok(html)
            }
        });

        match outcome {
            Ok(html) => {
                self.phase = InspectorPhase::Loaded;
                self.slot.content = html;
                self.slot.visible = true;
                self.slot.subject = self.requested;
                self.slot.failure = None;
            }
            Err(e) => {
                let message = match self.requested {
                    Some(subject) => format!("Failed to load segment {subject}: {e}"),
                    None => format!("Failed to load inspector: {e}"),
                };
                error!("{message}");
                self.phase = InspectorPhase::Closed;
                self.requested = None;
                self.slot = InspectorSlot {
                    failure: Some(message),
                    ..InspectorSlot::default()
                };
            }
        }
        Completion::Applied
    }

    /// Finish the slide-out started by a close ticket
    pub fn complete_close(&mut self, generation: u64) -> Completion {
        if generation != self.generation || self.phase != InspectorPhase::Closing {
            debug!("Dropping stale inspector close #{generation}");
            return Completion::Stale;
        }

        self.phase = InspectorPhase::Closed;
        self.slot.visible = false;
        self.slot.sliding_out = false;
        self.slot.content.clear();
        self.slot.subject = None;
        Completion::Applied
    }

    /// Clear the failure indicator
    pub fn dismiss_failure(&mut self) {
        self.slot.failure = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::encoding::encode;
    use crate::domain::modifiers::ParameterSnapshot;

    fn setup() -> (InspectorLoader, Endpoints, EncodedParams) {
        let endpoints = Endpoints::parse("http://localhost:8000").expect("endpoints");
        let params = encode(&ParameterSnapshot::default());
        (InspectorLoader::default(), endpoints, params)
    }

    fn fetch_ticket(command: InspectorCommand) -> FetchTicket {
        match command {
            InspectorCommand::Fetch(ticket) => ticket,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_request_then_load() {
        let (mut loader, endpoints, params) = setup();
        let ticket = fetch_ticket(
            loader
                .request(SubjectId(42), &endpoints, &params)
                .expect("request"),
        );
        assert_eq!(loader.phase(), InspectorPhase::Pending);
        assert_eq!(ticket.delay, Duration::from_millis(1000));
        assert_eq!(
            ticket.url.as_str(),
            "http://localhost:8000/inspector/42/1,1,1,1,1,65.1,10,true,0,100"
        );

        let done = loader.complete_fetch(ticket.generation, Ok("<h2>Oxford Road</h2>".into()));
        assert_eq!(done, Completion::Applied);
        assert_eq!(loader.phase(), InspectorPhase::Loaded);
        assert!(loader.slot().visible);
        assert_eq!(loader.slot().content, "<h2>Oxford Road</h2>");
        assert_eq!(loader.slot().subject, Some(SubjectId(42)));
    }

    #[test]
    fn test_pending_clears_previous_content() {
        let (mut loader, endpoints, params) = setup();
        let first = fetch_ticket(loader.request(SubjectId(1), &endpoints, &params).expect("request"));
        loader.complete_fetch(first.generation, Ok("one".into()));

        loader.request(SubjectId(2), &endpoints, &params).expect("request");
        assert!(loader.slot().content.is_empty());
        assert!(loader.slot().visible);
        assert_eq!(loader.current_subject(), Some(SubjectId(2)));
    }

    #[test]
    fn test_last_requested_wins() {
        let (mut loader, endpoints, params) = setup();
        let first = fetch_ticket(loader.request(SubjectId(1), &endpoints, &params).expect("request"));
        let second = fetch_ticket(loader.request(SubjectId(2), &endpoints, &params).expect("request"));

        assert_eq!(loader.complete_fetch(second.generation, Ok("two".into())), Completion::Applied);
        assert_eq!(loader.complete_fetch(first.generation, Ok("one".into())), Completion::Stale);
        assert_eq!(loader.slot().content, "two");
        assert_eq!(loader.slot().subject, Some(SubjectId(2)));
    }

    #[test]
    fn test_close_from_every_phase() {
        let (_, endpoints, params) = setup();
        let mut phases = Vec::new();

        let closed = InspectorLoader::default();
        phases.push(closed);

        let mut pending = InspectorLoader::default();
        pending.request(SubjectId(7), &endpoints, &params).expect("request");
        phases.push(pending.clone());

        let mut loaded = pending;
        loaded.complete_fetch(loaded.generation(), Ok("seven".into()));
        phases.push(loaded.clone());

        let mut closing = loaded;
        closing.close();
        phases.push(closing);

        for mut loader in phases {
            let command = loader
                .request(SubjectId::NONE, &endpoints, &params)
                .expect("close");
            let InspectorCommand::Close(ticket) = command else {
                panic!("expected close");
            };
            assert_eq!(loader.phase(), InspectorPhase::Closing);
            assert!(loader.slot().sliding_out);
            assert_eq!(loader.complete_close(ticket.generation), Completion::Applied);
            assert_eq!(loader.phase(), InspectorPhase::Closed);
            assert!(!loader.slot().visible);
            assert!(loader.slot().content.is_empty());
            assert!(!loader.slot().sliding_out);
        }
    }

    #[test]
    fn test_close_invalidates_scheduled_fetch() {
        let (mut loader, endpoints, params) = setup();
        let ticket = fetch_ticket(loader.request(SubjectId(9), &endpoints, &params).expect("request"));
        let InspectorCommand::Close(close) = loader.close() else {
            panic!("expected close");
        };
        assert_eq!(loader.complete_fetch(ticket.generation, Ok("late".into())), Completion::Stale);
        loader.complete_close(close.generation);
        assert!(loader.slot().content.is_empty());
    }

    #[test]
    fn test_request_during_close_cancels_close() {
        let (mut loader, endpoints, params) = setup();
        let InspectorCommand::Close(close) = loader.close() else {
            panic!("expected close");
        };
        let ticket = fetch_ticket(loader.request(SubjectId(3), &endpoints, &params).expect("request"));
        assert_eq!(loader.complete_close(close.generation), Completion::Stale);
        assert_eq!(loader.phase(), InspectorPhase::Pending);
        loader.complete_fetch(ticket.generation, Ok("three".into()));
        assert_eq!(loader.phase(), InspectorPhase::Loaded);
    }

    #[test]
    fn test_failure_returns_to_closed_with_indicator() {
        let (mut loader, endpoints, params) = setup();
        let ticket = fetch_ticket(loader.request(SubjectId(5), &endpoints, &params).expect("request"));
        loader.complete_fetch(
            ticket.generation,
            Err(Error::Timeout {
                message: "no answer after 10s".into(),
            }),
        );
        assert_eq!(loader.phase(), InspectorPhase::Closed);
        assert!(!loader.slot().visible);
        assert!(loader.slot().content.is_empty());
        let failure = loader.slot().failure.clone().expect("failure kept");
        assert!(failure.contains("segment 5"));

        loader.request(SubjectId(6), &endpoints, &params).expect("request");
        assert!(loader.slot().failure.is_none());
    }

    #[test]
    fn test_blank_fragment_is_a_failure() {
        let (mut loader, endpoints, params) = setup();
        let ticket = fetch_ticket(loader.request(SubjectId(5), &endpoints, &params).expect("request"));
        loader.complete_fetch(ticket.generation, Ok("  \n".into()));
        assert_eq!(loader.phase(), InspectorPhase::Closed);
        assert!(loader.slot().failure.is_some());
    }
}
