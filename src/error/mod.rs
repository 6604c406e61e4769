use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::ConfigError;

/// Handler-level failures. Both variants answer with the server's default
/// empty 200: callers learn about fetch problems from the JSON body, and a
/// missing or unserializable record produces no body at all.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing url query parameter")]
    MissingUrl,

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        StatusCode::OK.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures while assembling the server at startup; fatal to the process.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
