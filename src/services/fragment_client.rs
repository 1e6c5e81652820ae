//! Fragment Client
//!
//! Fetches inspector HTML fragments from the server. The loader only sees the
//! [`FragmentSource`] trait, so tests substitute an in-memory source.

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{Client, Url};
use tracing::debug;

use crate::error::{Error, Result};

/// Anything that can produce the HTML fragment behind an inspector URL
pub trait FragmentSource: Send + Sync {
    fn fetch(&self, url: Url) -> BoxFuture<'_, Result<String>>;
}

/// reqwest-backed source talking to the live server
#[derive(Debug, Clone)]
pub struct HttpFragmentClient {
    client: Client,
}

impl HttpFragmentClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mdt-explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl FragmentSource for HttpFragmentClient {
    fn fetch(&self, url: Url) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move {
            debug!("GET {url}");
            let resp = self.client.get(url.clone()).send().await?;

            if !resp.status().is_success() {
                return Err(Error::HttpStatus {
                    status: resp.status().as_u16(),
                    url: url.to_string(),
                });
            }

            let body = resp.text().await?;
            if body.trim().is_empty() {
                return Err(Error::EmptyFragment {
                    url: url.to_string(),
                });
            }
            Ok(body)
        })
    }
}
