//! Augmentation orchestrator: wraps the enrichment provider with the
//! per-operation degradation policy.
//!
//! Three operations, three policies:
//! - insight: any failure is silently absorbed, the caller gets `None`
//! - playlist: any failure is terminal and surfaced to the caller
//! - affirmations: any failure resolves to the static fallback bank
//!
//! Each call is bounded twice: the HTTP client carries a per-request
//! timeout, and the orchestrator wraps the whole call in
//! `tokio::time::timeout` so non-HTTP provider implementations are bounded
//! too. One attempt per operation; retry policy belongs to the caller.

use super::fallback::affirmation_fallback;
use super::models::{
    AffirmationRequest, AffirmationSet, GeneratedPlaylist, InsightRequest, PlaylistRequest,
};
use super::provider::{EnrichmentError, EnrichmentProvider};
use crate::config::ProviderConfig;
use crate::metrics::METRICS;
use crate::mood::{Intensity, MoodCategory};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

pub struct AugmentationOrchestrator {
    provider: Arc<dyn EnrichmentProvider>,
    config: ProviderConfig,
}

impl AugmentationOrchestrator {
    pub fn new(provider: Arc<dyn EnrichmentProvider>, config: ProviderConfig) -> Self {
        Self { provider, config }
    }

    /// Fetch an insight fragment to append to the classifier explanation.
    /// Fails soft: every failure mode returns `None`.
    pub async fn enrich_insight(
        &self,
        category: MoodCategory,
        intensity: Intensity,
        context: Option<String>,
    ) -> Option<String> {
        let request = InsightRequest {
            mood_type: category,
            intensity,
            context,
        };

        let start = Instant::now();
        let result = bounded(
            self.config.insight_timeout(),
            self.provider.analyze_mood(&request),
        )
        .await;
        observe("insight", start);

        match result {
            Ok(response) => match response.ai_insights.filter(|s| !s.trim().is_empty()) {
                Some(insight) => {
                    METRICS.record_enrichment("insight", "success");
                    Some(insight)
                }
                None => {
                    METRICS.record_enrichment("insight", "fallback");
                    warn!("Insight response missing ai_insights; using base explanation");
                    None
                }
            },
            Err(e) => {
                METRICS.record_enrichment("insight", outcome_label(&e));
                warn!("Insight enrichment failed, using base explanation: {}", e);
                None
            }
        }
    }

    /// Generate a playlist through the provider. There is no local catalog
    /// to fall back on, so every failure — timeout, transport, malformed
    /// payload, empty song list — is surfaced to the caller.
    pub async fn generate_playlist(
        &self,
        category: MoodCategory,
        intensity: Intensity,
        genre_hints: Vec<String>,
        duration_minutes: u32,
    ) -> Result<GeneratedPlaylist, EnrichmentError> {
        let request = PlaylistRequest {
            mood_type: category,
            intensity,
            genres: genre_hints,
            duration_minutes,
        };

        let start = Instant::now();
        let result = bounded(
            self.config.playlist_timeout(),
            self.provider.generate_playlist(&request),
        )
        .await;
        observe("playlist", start);

        let response = result.map_err(|e| {
            METRICS.record_enrichment("playlist", outcome_label(&e));
            warn!("Playlist generation failed: {}", e);
            e
        })?;

        let mut songs = response.songs;
        songs.retain(|s| !s.title.trim().is_empty() && !s.artist.trim().is_empty());
        if songs.is_empty() {
            // An empty-but-well-formed song list is still a failure; it
            // must never be converted into a "successful" empty playlist.
            METRICS.record_enrichment("playlist", "error");
            warn!("Playlist response contained no usable songs");
            return Err(EnrichmentError::EmptyPlaylist);
        }
        songs.truncate(self.config.max_songs);

        METRICS.record_enrichment("playlist", "success");
        Ok(GeneratedPlaylist {
            name: response
                .playlist_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| default_playlist_name(category)),
            description: response
                .description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| {
                    format!("A curated playlist for your {} mood", category.as_str())
                }),
            songs,
        })
    }

    /// Generate affirmations. Never fails outward: any unusable provider
    /// result resolves to the static, mood-indexed fallback bank.
    pub async fn generate_affirmations(
        &self,
        category: MoodCategory,
        intensity: Intensity,
        user_name: Option<String>,
        context: Option<String>,
    ) -> AffirmationSet {
        let request = AffirmationRequest {
            mood_type: category,
            intensity,
            user_name: user_name.clone(),
            context,
        };

        let start = Instant::now();
        let result = bounded(
            self.config.affirmation_timeout(),
            self.provider.generate_affirmations(&request),
        )
        .await;
        observe("affirmations", start);

        match result {
            Ok(response) => {
                let affirmations: Vec<String> = response
                    .affirmations
                    .into_iter()
                    .filter(|a| !a.trim().is_empty())
                    .collect();
                match (affirmations.is_empty(), response.personalized_message) {
                    (false, Some(message)) if !message.trim().is_empty() => {
                        METRICS.record_enrichment("affirmations", "success");
                        AffirmationSet {
                            affirmations,
                            personalized_message: message,
                            breathing_instruction: response.breathing_instruction,
                        }
                    }
                    _ => {
                        METRICS.record_enrichment("affirmations", "fallback");
                        warn!("Affirmation response unusable; serving static fallback");
                        affirmation_fallback(category, user_name.as_deref())
                    }
                }
            }
            Err(e) => {
                METRICS.record_enrichment("affirmations", outcome_label(&e));
                warn!("Affirmation generation failed, serving static fallback: {}", e);
                affirmation_fallback(category, user_name.as_deref())
            }
        }
    }
}

/// Bound a provider call with a wall-clock deadline. An elapsed deadline
/// is indistinguishable from a connection failure by policy.
async fn bounded<T>(
    deadline: Duration,
    call: impl std::future::Future<Output = Result<T, EnrichmentError>>,
) -> Result<T, EnrichmentError> {
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result,
        Err(_) => Err(EnrichmentError::Timeout(format!(
            "provider call exceeded {:?}",
            deadline
        ))),
    }
}

fn observe(operation: &str, start: Instant) {
    METRICS
        .enrichment_duration
        .with_label_values(&[operation])
        .observe(start.elapsed().as_secs_f64());
}

fn outcome_label(error: &EnrichmentError) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else {
        "error"
    }
}

fn default_playlist_name(category: MoodCategory) -> String {
    let name = category.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("{}{} Mix", first.to_uppercase(), chars.as_str()),
        None => "Mood Mix".to_string(),
    }
}
