use tracing::info;
use tracing_subscriber::EnvFilter;

use opengraph_server::config::Config;
use opengraph_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing: JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "opengraph_server=info,tower_http=info".parse().unwrap());

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🚀 Open Graph server starting...");

    let config = Config::from_env().expect("Failed to load configuration");
    info!("📝 Configuration loaded");

    if config.allows_any_origin() {
        info!("🔓 CORS: any origin");
    } else {
        info!(origin = %config.origin_allowed, "🔒 CORS: single allowed origin");
    }

    let state = AppState::from_config(&config).expect("Failed to build application state");
    let app = opengraph_server::router(state);

    let addr = config.server_addr();
    info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
