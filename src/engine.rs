//! The exposed inference capability: explicitly constructed composition
//! of classifier, ranker, and augmentation orchestrator.
//!
//! There are no ambient singletons here; callers build one `MoodEngine`
//! with an injected provider and share it by reference. Every request is
//! handled statelessly.

use crate::config::ProviderConfig;
use crate::enrichment::{
    AffirmationSet, AugmentationOrchestrator, EnrichmentProvider, GeneratedPlaylist,
};
use crate::error::Result;
use crate::metrics::METRICS;
use crate::mood::{
    assemble, Intensity, Lexicon, MoodAnalysis, MoodCategory, MoodClassifier, MoodInput,
    SuggestionRanker,
};
use std::sync::Arc;
use tracing::info;

pub struct MoodEngine {
    classifier: MoodClassifier,
    ranker: SuggestionRanker,
    orchestrator: AugmentationOrchestrator,
}

impl MoodEngine {
    pub fn new(provider: Arc<dyn EnrichmentProvider>, config: ProviderConfig) -> Self {
        Self {
            classifier: MoodClassifier::new(Lexicon::builtin()),
            ranker: SuggestionRanker::new(),
            orchestrator: AugmentationOrchestrator::new(provider, config),
        }
    }

    /// Full inference: classify, rank, attempt insight enrichment, merge.
    /// Never fails; a failed enrichment call leaves the base explanation
    /// untouched.
    pub async fn analyze(&self, input: &MoodInput) -> MoodAnalysis {
        let classified = self.classifier.classify(input);
        METRICS.record_classification(classified.category.as_str());
        info!(
            category = classified.category.as_str(),
            intensity = classified.intensity.get(),
            confidence = classified.confidence,
            "mood classified"
        );

        // The ranker is pure and synchronous; only the enrichment call
        // suspends, bounded by its own timeout.
        let suggestions = self.ranker.rank(classified.category, classified.intensity);
        let insight = self
            .orchestrator
            .enrich_insight(
                classified.category,
                classified.intensity,
                input.text_input.clone(),
            )
            .await;

        assemble(classified, suggestions, insight)
    }

    /// Playlist generation. The one operation whose provider failure is
    /// surfaced to the caller.
    pub async fn playlist(
        &self,
        category: MoodCategory,
        intensity: Intensity,
        genre_hints: Vec<String>,
        duration_minutes: u32,
    ) -> Result<GeneratedPlaylist> {
        let playlist = self
            .orchestrator
            .generate_playlist(category, intensity, genre_hints, duration_minutes)
            .await?;
        Ok(playlist)
    }

    /// Affirmation generation; always returns a usable set.
    pub async fn affirmations(
        &self,
        category: MoodCategory,
        intensity: Intensity,
        user_name: Option<String>,
        context: Option<String>,
    ) -> AffirmationSet {
        self.orchestrator
            .generate_affirmations(category, intensity, user_name, context)
            .await
    }
}
