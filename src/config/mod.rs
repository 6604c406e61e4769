use std::env;
use std::time::Duration;

use axum::http::HeaderValue;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const ANY_ORIGIN: &str = "*";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a TCP port number, got {0:?}")]
    InvalidPort(String),

    #[error("ORIGIN_ALLOWED is not a valid header value: {0:?}")]
    InvalidOrigin(String),

    #[error("FETCH_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// CORS allowed origin; `*` allows any origin.
    pub origin_allowed: String,
    /// Outbound fetch timeout. `None` keeps the HTTP client's default (no timeout).
    pub fetch_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let server_port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => {
                info!("No PORT environment variable detected, defaulting to {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        let origin_allowed = match get("ORIGIN_ALLOWED") {
            Some(origin) => {
                HeaderValue::from_str(&origin)
                    .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))?;
                origin
            }
            None => {
                info!("No ORIGIN_ALLOWED environment variable detected, defaulting to {ANY_ORIGIN}");
                ANY_ORIGIN.to_string()
            }
        };

        let fetch_timeout = get("FETCH_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| ConfigError::InvalidTimeout(raw))
            })
            .transpose()?;

        Ok(Config {
            server_host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            origin_allowed,
            fetch_timeout,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.origin_allowed == ANY_ORIGIN
    }
}
