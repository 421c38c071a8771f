//! Enrichment provider integration: the untrusted generative service that
//! augments local results, and the degradation policy around it.
//!
//! - `provider` — the capability seam (async trait) and error taxonomy
//! - `client` — reqwest implementation with per-operation timeouts
//! - `repair` — best-effort JSON extraction from prose-wrapped responses
//! - `fallback` — static mood-indexed affirmation bank
//! - `orchestrator` — absorb / surface / fall back, per operation

pub mod client;
pub mod fallback;
pub mod models;
pub mod orchestrator;
pub mod provider;
pub mod repair;

pub use client::HttpEnrichmentClient;
pub use fallback::affirmation_fallback;
pub use models::{
    AffirmationRequest, AffirmationResponse, AffirmationSet, GeneratedPlaylist, InsightRequest,
    InsightResponse, PlaylistRequest, PlaylistResponse, Song,
};
pub use orchestrator::AugmentationOrchestrator;
pub use provider::{EnrichmentError, EnrichmentProvider};
