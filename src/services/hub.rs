//! ServiceHub - Async Work Scheduler
//!
//! Owns the event sender and the fragment source. Controllers hand it the
//! commands their state machines return; the hub runs them on tokio and
//! reports the outcome as an [`AppEvent`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use gpui::Global;
use tracing::debug;

use crate::eventing::app_event::{AppEvent, EventSender};
use crate::services::fragment_client::FragmentSource;
use crate::services::inspector_service::{resolve_close, resolve_fetch};
use crate::services::navigator::resolve_navigation;
use crate::services::runtime::spawn_named_in_tokio;
use crate::state::inspector_state::InspectorCommand;
use crate::state::navigation_state::NavigationCommand;

pub struct ServiceHub {
    event_tx: EventSender,
    source: Arc<dyn FragmentSource>,
    timeout: Duration,
}

impl Global for ServiceHub {}

impl ServiceHub {
    pub fn new(event_tx: EventSender, source: Arc<dyn FragmentSource>, timeout: Duration) -> Self {
        let hub = Self {
            event_tx,
            source,
            timeout,
        };
        hub.emit(AppEvent::info("Services initialised"));
        hub
    }

    pub fn emit(&self, event: AppEvent) {
        send_event(&self.event_tx, event);
    }

    /// Resolve an inspector command in the background
    pub fn schedule_inspector(&self, command: InspectorCommand) {
        let name = match command {
            InspectorCommand::Fetch(_) => "inspector-fetch",
            InspectorCommand::Close(_) => "inspector-close",
        };
        debug!("Scheduling {name} #{}", command.generation());
        spawn_named_in_tokio(name, self.inspector_task(command));
    }

    /// Resolve a navigation command in the background
    pub fn schedule_navigation(&self, command: NavigationCommand) {
        spawn_named_in_tokio("navigation", self.navigation_task(command));
    }

    /// Future resolving an inspector command and reporting its outcome
    pub fn inspector_task(&self, command: InspectorCommand) -> impl Future<Output = ()> + Send + 'static {
        let tx = self.event_tx.clone();
        let source = self.source.clone();
        let timeout = self.timeout;

        async move {
            let event = match command {
                InspectorCommand::Fetch(ticket) => {
                    let outcome = resolve_fetch(ticket, source.as_ref(), timeout).await;
                    AppEvent::InspectorFetched {
                        generation: outcome.generation,
                        result: outcome.result,
                    }
                }
                InspectorCommand::Close(ticket) => AppEvent::InspectorClosed {
                    generation: resolve_close(ticket).await,
                },
            };
            send_event(&tx, event);
        }
    }

    /// Future resolving a navigation command and reporting it as due
    pub fn navigation_task(&self, command: NavigationCommand) -> impl Future<Output = ()> + Send + 'static {
        let tx = self.event_tx.clone();
        async move {
            let url = resolve_navigation(command).await;
            send_event(&tx, AppEvent::NavigationReady { url });
        }
    }
}

/// Deliver an event to the workspace; after shutdown there is no one to tell
fn send_event(tx: &EventSender, event: AppEvent) {
    if tx.unbounded_send(event).is_err() {
        debug!("Event channel closed, dropping event");
    }
}

#[cfg(test)]
mod tests {
    use futures::future::BoxFuture;
    use reqwest::Url;

    use super::*;
    use crate::domain::encoding::encode;
    use crate::domain::endpoints::{Endpoints, SubjectId};
    use crate::domain::modifiers::ParameterSnapshot;
    use crate::error::Result;
    use crate::eventing::app_event::event_channel;
    use crate::state::inspector_state::InspectorLoader;

    struct Fixed;

    impl FragmentSource for Fixed {
        fn fetch(&self, _url: Url) -> BoxFuture<'_, Result<String>> {
            Box::pin(async { Ok("<p>ok</p>".to_string()) })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_outlives_closed_channel() {
        let (tx, rx) = event_channel();
        let hub = ServiceHub::new(tx, Arc::new(Fixed), Duration::from_secs(5));
        drop(rx);

        let endpoints = Endpoints::parse("http://localhost:8000").expect("base url");
        let params = encode(&ParameterSnapshot::default());
        let mut loader = InspectorLoader::default();
        let command = loader
            .request(SubjectId(3), &endpoints, &params)
            .expect("fetch");

        hub.inspector_task(command).await;
        hub.emit(AppEvent::info("after shutdown"));
        assert!(hub.event_tx.is_closed());
    }
}
