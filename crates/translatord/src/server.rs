//! HTTP server for translatord

use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use translator_common::{PatternRecord, ERROR_PATTERNS};

/// Default bind address; the port matches the original deployment
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Application state shared across handlers
///
/// The catalog is static read-only data, so concurrent handlers need no
/// locking around it.
pub struct AppState {
    pub catalog: &'static [PatternRecord],
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: ERROR_PATTERNS,
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the application router with CORS open to any origin, so the
/// frontend can call the API from anywhere.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health_routes())
        .merge(routes::translate_routes())
        .merge(routes::stats_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the HTTP server
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
