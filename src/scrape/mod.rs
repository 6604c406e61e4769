pub mod assembler;
pub mod extractor;
pub mod fetcher;

use reqwest::Client;
use tracing::{info, warn};

use crate::models::Metadata;

/// Fetch `url` and return its completed metadata record.
///
/// Never fails: transport errors are logged and folded into `StatusCode`.
pub async fn scrape(client: &Client, url: &str) -> Metadata {
    info!(url, "Visiting");

    let outcome = fetcher::fetch(client, url).await;
    match &outcome {
        Ok(page) => info!(status = page.status, "Response received"),
        Err(e) => warn!(status = e.status(), error = %e, url, "Failed to fetch target URL"),
    }

    assembler::assemble(url, outcome)
}
