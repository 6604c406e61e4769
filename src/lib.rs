pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod scrape;
pub mod state;

use axum::{
    http::{HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ANY_ORIGIN;
use crate::state::AppState;

/// CORS policy for the single route. Preflight `OPTIONS` requests are answered
/// by the layer itself.
pub fn cors_layer(origin: &HeaderValue) -> CorsLayer {
    let allow_origin = if origin == ANY_ORIGIN {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(origin.clone())
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([HeaderName::from_static("x-requested-with")])
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.origin_allowed);

    Router::new()
        .route("/", get(handlers::metadata::get_metadata))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
