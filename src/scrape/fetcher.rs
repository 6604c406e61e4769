use std::time::Duration;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use thiserror::Error;

pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; OpenGraphBot/1.0)";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {source}")]
    Request { status: u16, source: reqwest::Error },

    #[error("failed to read response body (HTTP {status}): {source}")]
    Body { status: u16, source: reqwest::Error },
}

impl FetchError {
    /// Status reported alongside the failure, 0 when no response arrived.
    pub fn status(&self) -> u16 {
        match self {
            FetchError::Request { status, .. } | FetchError::Body { status, .. } => *status,
        }
    }
}

/// A received response. `html` is `None` when the body is not an HTML document.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub html: Option<String>,
}

/// Build the outbound client. Without a timeout the request waits as long as
/// the target takes; redirects follow reqwest's default policy.
pub fn build_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Issue a single GET to `url`, taken verbatim. Non-2xx responses are still
/// successes here; only transport failures are errors. No retries.
pub async fn fetch(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request {
            status: e.status().map_or(0, |s| s.as_u16()),
            source: e,
        })?;

    let status = response.status().as_u16();
    if !is_html(response.headers().get(CONTENT_TYPE)) {
        return Ok(FetchedPage { status, html: None });
    }

    let html = response
        .text()
        .await
        .map_err(|source| FetchError::Body { status, source })?;

    Ok(FetchedPage {
        status,
        html: Some(html),
    })
}

fn is_html(content_type: Option<&HeaderValue>) -> bool {
    content_type
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("html"))
}
