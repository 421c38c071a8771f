//! HTTP-layer tests: boundary validation and status mapping.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use mood_engine::api::{build_router, AppState};
use mood_engine::engine::MoodEngine;
use mood_engine::enrichment::HttpEnrichmentClient;
use mood_engine::ProviderConfig;
use std::sync::Arc;
use tower::ServiceExt;

fn router_for(provider_url: &str) -> Router {
    let config = ProviderConfig {
        base_url: provider_url.to_string(),
        ..Default::default()
    };
    let provider = Arc::new(HttpEnrichmentClient::new(config.clone()).unwrap());
    let engine = Arc::new(MoodEngine::new(provider, config));
    build_router(AppState { engine }, 64 * 1024)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let response = router_for("http://127.0.0.1:1")
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn analyze_rejects_unknown_category_before_classification() {
    let response = router_for("http://127.0.0.1:1")
        .oneshot(post_json(
            "/api/v1/mood/analyze",
            r#"{"mood_type": "ecstatic", "intensity": 5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn analyze_rejects_out_of_range_intensity() {
    let response = router_for("http://127.0.0.1:1")
        .oneshot(post_json(
            "/api/v1/mood/analyze",
            r#"{"mood_type": "happy", "intensity": 11}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn analyze_returns_capped_suggestions_with_provider_down() {
    let response = router_for("http://127.0.0.1:1")
        .oneshot(post_json(
            "/api/v1/mood/analyze",
            r#"{"text_input": "I'm a bit sad"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["mood_type"], "sad");
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty() && suggestions.len() <= 4);
    assert!(body["message"].as_str().unwrap().len() > 0);
}

#[tokio::test]
async fn playlist_failure_surfaces_as_bad_gateway() {
    let response = router_for("http://127.0.0.1:1")
        .oneshot(post_json(
            "/api/v1/mood/playlist",
            r#"{"mood_type": "sad", "intensity": 6}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn playlist_empty_songs_surfaces_as_bad_gateway() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/generate-playlist")
        .with_status(200)
        .with_body(r#"{"songs": []}"#)
        .create_async()
        .await;

    let response = router_for(&server.url())
        .oneshot(post_json(
            "/api/v1/mood/playlist",
            r#"{"mood_type": "happy", "intensity": 8}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn affirmations_always_succeed() {
    let response = router_for("http://127.0.0.1:1")
        .oneshot(post_json(
            "/api/v1/mood/affirmations",
            r#"{"mood_type": "anxious", "intensity": 9, "user_name": "Ada"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["affirmations"].as_array().unwrap().len(), 5);
    assert!(body["breathing_instruction"].is_string());
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_text() {
    // Drive one classification first so the counter families exist.
    let router = router_for("http://127.0.0.1:1");
    let _ = router
        .clone()
        .oneshot(post_json("/api/v1/mood/analyze", r#"{"text_input": "okay"}"#))
        .await
        .unwrap();

    let response = router
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("mood_classifications_total"));
}
