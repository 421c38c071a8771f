//! HTTP implementation of the enrichment-provider capability.

use super::models::{
    AffirmationRequest, AffirmationResponse, InsightRequest, InsightResponse, PlaylistRequest,
    PlaylistResponse,
};
use super::provider::{EnrichmentError, EnrichmentProvider};
use super::repair;
use crate::config::ProviderConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Reqwest-backed enrichment provider client. Each operation carries its
/// own request timeout; no retries are performed here.
pub struct HttpEnrichmentClient {
    http: Client,
    config: ProviderConfig,
}

impl HttpEnrichmentClient {
    /// Create a new client. The builder-level timeout is the playlist
    /// bound (the longest); faster operations tighten it per request.
    pub fn new(config: ProviderConfig) -> Result<Self, EnrichmentError> {
        let http = Client::builder()
            .timeout(config.playlist_timeout())
            .build()
            .map_err(|e| EnrichmentError::RequestFailed(e.to_string()))?;

        Ok(Self { http, config })
    }

    async fn post_raw<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<String, EnrichmentError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("Calling enrichment provider: {}", url);

        let mut req = self.http.post(&url).json(body).timeout(timeout);

        if let Some(api_key) = &self.config.api_key {
            req = req.bearer_auth(api_key);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                EnrichmentError::Timeout(e.to_string())
            } else {
                EnrichmentError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| EnrichmentError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            return Err(EnrichmentError::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<R, EnrichmentError> {
        let text = self.post_raw(path, body, timeout).await?;
        serde_json::from_str(&text).map_err(|e| EnrichmentError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl EnrichmentProvider for HttpEnrichmentClient {
    async fn analyze_mood(
        &self,
        request: &InsightRequest,
    ) -> Result<InsightResponse, EnrichmentError> {
        self.post_json("/analyze-mood", request, self.config.insight_timeout())
            .await
    }

    async fn generate_playlist(
        &self,
        request: &PlaylistRequest,
    ) -> Result<PlaylistResponse, EnrichmentError> {
        let text = self
            .post_raw("/generate-playlist", request, self.config.playlist_timeout())
            .await?;

        // Generative providers sometimes wrap the JSON in prose. Try a
        // strict parse first, then the repair step, then give up.
        match serde_json::from_str(&text) {
            Ok(parsed) => Ok(parsed),
            Err(strict_err) => match repair::extract_json(&text) {
                Some(value) => serde_json::from_value(value)
                    .map_err(|e| EnrichmentError::InvalidResponse(e.to_string())),
                None => Err(EnrichmentError::InvalidResponse(strict_err.to_string())),
            },
        }
    }

    async fn generate_affirmations(
        &self,
        request: &AffirmationRequest,
    ) -> Result<AffirmationResponse, EnrichmentError> {
        self.post_json(
            "/generate-affirmations",
            request,
            self.config.affirmation_timeout(),
        )
        .await
    }
}
