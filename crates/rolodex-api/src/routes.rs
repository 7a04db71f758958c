//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression,
//! and all endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS middleware: allow localhost origins for dashboard access.
    // Use the configured port plus port+1 for a dev server.
    let port = state.config.lock().map(|c| c.server.port).unwrap_or(4400);
    let dev_port = port.saturating_add(1);
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([
            format!("http://127.0.0.1:{}", port)
                .parse::<HeaderValue>()
                .unwrap(),
            format!("http://localhost:{}", port)
                .parse::<HeaderValue>()
                .unwrap(),
            format!("http://127.0.0.1:{}", dev_port)
                .parse::<HeaderValue>()
                .unwrap(),
            format!("http://localhost:{}", dev_port)
                .parse::<HeaderValue>()
                .unwrap(),
        ]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/ui", get(handlers::ui))
        .route("/records", get(handlers::list_records))
        .route("/records/refresh", post(handlers::refresh))
        .route("/records/query", post(handlers::query_records))
        .route("/chat", post(handlers::chat))
        .route(
            "/chat/history",
            get(handlers::chat_history).delete(handlers::clear_chat_history),
        )
        .route(
            "/campaign",
            get(handlers::get_campaign).put(handlers::update_campaign),
        )
        .route("/campaign/mailto", get(handlers::campaign_mailto))
        .route(
            "/config",
            get(handlers::get_config)
                .put(handlers::update_config)
                .layer(DefaultBodyLimit::max(64 * 1024)), // 64KB for config
        )
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB global limit
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on the configured address.
///
/// Binds to 127.0.0.1 (localhost only) on the given port.
pub async fn start_server(
    port: u16,
    state: AppState,
) -> Result<(), rolodex_core::error::RolodexError> {
    let addr = format!("127.0.0.1:{}", port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        rolodex_core::error::RolodexError::Config(format!("Failed to bind {}: {}", addr, e))
    })?;

    axum::serve(listener, router)
        .await
        .map_err(rolodex_core::error::RolodexError::Io)?;

    Ok(())
}
