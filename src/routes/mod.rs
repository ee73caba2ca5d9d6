//! Router assembly: HTTP endpoints, WebSocket upgrade, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;


/// Build the application router with:
/// - WebSocket at `/ws`
/// - REST-ish API under `/api/v1/...`
/// - CORS (allow any origin/method/headers)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // Catalog
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/scenarios", get(http::http_list_scenarios))
        .route("/api/v1/scenarios/recommended", get(http::http_recommended))
        .route("/api/v1/scenarios/:id", get(http::http_get_scenario))
        .route("/api/v1/categories", get(http::http_categories))
        .route("/api/v1/insights", get(http::http_insights))
        .route("/api/v1/learning-paths", get(http::http_learning_paths))
        // Generation
        .route("/api/v1/translate", post(http::http_post_translate))
        .route("/api/v1/assist", post(http::http_post_assist))
        .route("/api/v1/assist/refine", post(http::http_post_refine))
        .route("/api/v1/assist/explain", post(http::http_post_explain))
        .route("/api/v1/convert", post(http::http_post_convert))
        // Progress + badges
        .route("/api/v1/badges", get(http::http_badges))
        .route("/api/v1/progress", get(http::http_get_progress).post(http::http_post_progress))
        .route("/api/v1/progress/stats", get(http::http_progress_stats))
        .route("/api/v1/progress/categories", get(http::http_progress_categories))
        .route("/api/v1/progress/activity", get(http::http_progress_activity))
        .route("/api/v1/progress/badges", get(http::http_progress_badges))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
