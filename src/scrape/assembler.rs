use crate::models::Metadata;

use super::extractor;
use super::fetcher::{FetchError, FetchedPage};

/// Turn the fetch outcome into the final record.
///
/// Any received response, whatever its status, gets the link fallback. A
/// transport failure yields only the best-effort status with empty strings.
pub fn assemble(requested_url: &str, outcome: Result<FetchedPage, FetchError>) -> Metadata {
    match outcome {
        Ok(page) => {
            let mut record = page.html.as_deref().map(extractor::extract).unwrap_or_default();
            record.status_code = page.status;
            if record.link.is_empty() {
                record.link = requested_url.to_string();
            }
            record
        }
        Err(e) => Metadata {
            status_code: e.status(),
            ..Metadata::default()
        },
    }
}
