//! Inspector Service
//!
//! Resolves inspector tickets on the tokio side: wait out the slide delay,
//! then fetch under a bounded timeout.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::services::fragment_client::FragmentSource;
use crate::state::inspector_state::{CloseTicket, FetchTicket};

/// Outcome of a fetch ticket, tagged with its generation
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<String>,
}

pub async fn resolve_fetch(
    ticket: FetchTicket,
    source: &dyn FragmentSource,
    timeout: Duration,
) -> FetchOutcome {
    tokio::time::sleep(ticket.delay).await;

    let result = match tokio::time::timeout(timeout, source.fetch(ticket.url.clone())).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout {
            message: format!(
                "segment {} did not answer within {}s",
                ticket.subject,
                timeout.as_secs_f32()
            ),
        }),
    };

    FetchOutcome {
        generation: ticket.generation,
        result,
    }
}

/// Wait out the slide-out, returning the generation to complete
pub async fn resolve_close(ticket: CloseTicket) -> u64 {
    tokio::time::sleep(ticket.delay).await;
    ticket.generation
}
