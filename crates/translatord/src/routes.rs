//! API routes for translatord

use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::{error, info};
use translator_common::{
    find_solution, ErrorDetail, HealthResponse, StatsResponse, TranslateRequest,
    TranslationResult,
};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(health_check))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Error Translator API is running!".to_string(),
    })
}

// ============================================================================
// Translate Routes
// ============================================================================

pub fn translate_routes() -> Router<AppStateArc> {
    Router::new().route("/api/translate", post(translate_error))
}

/// Translate an error message to plain English
///
/// The request's `language` field is accepted but not used to filter
/// matching yet.
async fn translate_error(
    State(_state): State<AppStateArc>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslationResult>, (StatusCode, Json<ErrorDetail>)> {
    info!("  Translating ({}): {:.60}", req.language, req.error_message);

    let result = find_solution(&req.error_message).map_err(|e| {
        error!("  Translation failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDetail {
                detail: e.to_string(),
            }),
        )
    })?;

    // Echo back the first 100 characters of the submitted error
    Ok(Json(result.with_original_error(&req.error_message)))
}

// ============================================================================
// Stats Routes
// ============================================================================

pub fn stats_routes() -> Router<AppStateArc> {
    Router::new().route("/api/stats", get(get_stats))
}

async fn get_stats(State(state): State<AppStateArc>) -> Json<StatsResponse> {
    Json(StatsResponse {
        total_patterns: state.catalog.len(),
        status: "Operational".to_string(),
    })
}
