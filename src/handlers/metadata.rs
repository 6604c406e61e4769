use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::error::{AppError, AppResult};
use crate::scrape;
use crate::state::AppState;

/// Value of the first `url` query parameter, if any. Later repeats are ignored
/// and an empty first value counts as missing.
pub fn first_url(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.as_str())
        .filter(|url| !url.is_empty())
}

/// GET /?url=<encoded-url>
///
/// Fetches the target and returns its Open Graph record as JSON. The fetch
/// status travels in `StatusCode` inside the body; the outer status stays 200.
/// An undecodable query string is treated like a missing `url`.
/// `Access-Control-Allow-Origin` is added by the router's CORS layer.
pub async fn get_metadata(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
) -> AppResult<Response> {
    let params = query.map(|Query(params)| params).unwrap_or_default();
    let url = first_url(&params).ok_or(AppError::MissingUrl)?;

    let record = scrape::scrape(&state.http_client, url).await;
    let body = serde_json::to_vec(&record)?;

    Ok((
        [
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ),
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            ),
        ],
        body,
    )
        .into_response())
}
