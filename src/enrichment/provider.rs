//! The enrichment-provider capability seam.
//!
//! The engine only needs "ask the provider, get JSON-shaped data back";
//! everything about how that happens lives behind this trait. The HTTP
//! implementation is in [`super::client`]; tests substitute their own.

use super::models::{
    AffirmationRequest, AffirmationResponse, InsightRequest, InsightResponse, PlaylistRequest,
    PlaylistResponse,
};
use async_trait::async_trait;

/// Enrichment provider error types.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Upstream error: status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider returned an empty song list")]
    EmptyPlaylist,
}

impl EnrichmentError {
    /// True for the failure modes a caller might retry later (the engine
    /// itself never retries).
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// A request/response capability against the external generative service.
/// Implementations return raw wire responses; validation and degradation
/// policy belong to the orchestrator.
#[async_trait]
pub trait EnrichmentProvider: Send + Sync {
    async fn analyze_mood(&self, request: &InsightRequest)
        -> Result<InsightResponse, EnrichmentError>;

    async fn generate_playlist(
        &self,
        request: &PlaylistRequest,
    ) -> Result<PlaylistResponse, EnrichmentError>;

    async fn generate_affirmations(
        &self,
        request: &AffirmationRequest,
    ) -> Result<AffirmationResponse, EnrichmentError>;
}
