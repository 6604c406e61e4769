use axum::http::HeaderValue;
use reqwest::Client;

use crate::config::{Config, ConfigError};
use crate::error::StartupError;
use crate::scrape::fetcher;

/// Shared application state passed to the handler.
/// Built once from `Config` at startup; nothing in it changes per request.
#[derive(Clone)]
pub struct AppState {
    pub http_client: Client,
    pub origin_allowed: HeaderValue,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let origin_allowed = HeaderValue::from_str(&config.origin_allowed)
            .map_err(|_| ConfigError::InvalidOrigin(config.origin_allowed.clone()))?;

        Ok(AppState {
            http_client: fetcher::build_client(config.fetch_timeout)?,
            origin_allowed,
        })
    }
}
