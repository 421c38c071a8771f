use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::models::{
    error_codes, AffirmationApiRequest, AnalyzeRequest, ApiError, PlaylistApiRequest,
};
use crate::engine::MoodEngine;
use crate::enrichment::{AffirmationSet, EnrichmentError, GeneratedPlaylist};
use crate::error::EngineError;
use crate::metrics::METRICS;
use crate::mood::MoodAnalysis;

/// Shared API state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MoodEngine>,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

/// Map a surfaced engine failure onto a distinguishable HTTP status:
/// 400 for rejected input, 504 for deadline overruns the caller may
/// retry later, 502 for everything else the provider did wrong.
fn map_engine_error(error: EngineError) -> (StatusCode, Json<ApiError>) {
    match error {
        EngineError::InvalidInput(message) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(error_codes::VALIDATION_ERROR, message)),
        ),
        EngineError::Enrichment(EnrichmentError::Timeout(message)) => (
            StatusCode::GATEWAY_TIMEOUT,
            Json(ApiError::new(error_codes::TIMEOUT, message)),
        ),
        EngineError::Enrichment(other) => (
            StatusCode::BAD_GATEWAY,
            Json(ApiError::new(error_codes::UPSTREAM_ERROR, other.to_string())),
        ),
    }
}

/// Analyze a mood input and return classification plus suggestions.
///
/// POST /api/v1/mood/analyze
pub async fn analyze_mood(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<MoodAnalysis> {
    let input = request.into_mood_input().map_err(map_engine_error)?;

    info!(
        has_text = input.text_input.is_some(),
        has_quiz = input.quiz_responses.is_some(),
        "mood analyze request"
    );

    Ok(Json(state.engine.analyze(&input).await))
}

/// Generate a playlist through the enrichment provider.
///
/// POST /api/v1/mood/playlist
pub async fn generate_playlist(
    State(state): State<AppState>,
    Json(request): Json<PlaylistApiRequest>,
) -> ApiResult<GeneratedPlaylist> {
    let (category, intensity) = request.validate().map_err(map_engine_error)?;

    info!(
        category = category.as_str(),
        intensity = intensity.get(),
        "playlist request"
    );

    match state
        .engine
        .playlist(category, intensity, request.genres, request.duration_minutes)
        .await
    {
        Ok(playlist) => Ok(Json(playlist)),
        Err(e) => {
            error!("Playlist generation failed: {}", e);
            Err(map_engine_error(e))
        }
    }
}

/// Generate affirmations; never fails outward.
///
/// POST /api/v1/mood/affirmations
pub async fn generate_affirmations(
    State(state): State<AppState>,
    Json(request): Json<AffirmationApiRequest>,
) -> ApiResult<AffirmationSet> {
    let (category, intensity) = request.validate().map_err(map_engine_error)?;

    let set = state
        .engine
        .affirmations(category, intensity, request.user_name, request.context)
        .await;
    Ok(Json(set))
}

/// Service banner
///
/// GET /
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Mood inference engine",
        "status": "running"
    }))
}

/// Liveness check
///
/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "mood-engine"
    }))
}

/// Prometheus exposition
///
/// GET /metrics
pub async fn metrics() -> String {
    METRICS.gather()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let (status, body) =
            map_engine_error(EngineError::InvalidInput("Unknown mood_type 'glum'".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, error_codes::VALIDATION_ERROR);
        assert!(body.message.contains("glum"));
    }

    #[test]
    fn test_timeout_maps_to_504() {
        let (status, body) =
            map_engine_error(EnrichmentError::Timeout("slow".to_string()).into());
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body.code, error_codes::TIMEOUT);
    }

    #[test]
    fn test_empty_playlist_maps_to_502() {
        let (status, body) = map_engine_error(EnrichmentError::EmptyPlaylist.into());
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.code, error_codes::UPSTREAM_ERROR);
    }
}
