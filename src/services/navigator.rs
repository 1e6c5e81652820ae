//! Navigator - Delayed Hand-Off of Navigation Commands

use reqwest::Url;

use crate::state::navigation_state::NavigationCommand;

/// Wait until the overlay had its fade-in, then yield the URL to open
pub async fn resolve_navigation(command: NavigationCommand) -> Url {
    tokio::time::sleep(command.delay).await;
    command.url
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_navigation_is_delayed() {
        let started = tokio::time::Instant::now();
        let url = resolve_navigation(NavigationCommand {
            url: Url::parse("http://localhost:8000/emissions/").expect("url"),
            delay: Duration::from_millis(500),
        })
        .await;
        assert_eq!(url.path(), "/emissions/");
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
