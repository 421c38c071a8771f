//! Router assembly for the mood API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    analyze_mood, generate_affirmations, generate_playlist, health, metrics, root, AppState,
};

/// Build the API router with tracing and body-limit middleware.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api/v1/mood/analyze", post(analyze_mood))
        .route("/api/v1/mood/playlist", post(generate_playlist))
        .route("/api/v1/mood/affirmations", post(generate_affirmations))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
