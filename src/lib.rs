//! Mood inference and coping-suggestion engine.
//!
//! Turns an ambiguous emotional-state signal (free text, an explicit
//! mood+intensity pair, or quiz answers) into a classified mood with a
//! confidence score and a ranked list of coping suggestions, optionally
//! augmented by an external generative provider. Provider failures
//! degrade gracefully: insight enrichment is silently absorbed,
//! affirmations fall back to a static bank, and only playlist generation
//! surfaces a failure to the caller.
//!
//! The core (`mood`) is deterministic and pure; the only suspending code
//! is the provider integration (`enrichment`), each call individually
//! bounded by a timeout.

pub mod api;
pub mod config;
pub mod engine;
pub mod enrichment;
pub mod error;
pub mod metrics;
pub mod mood;

pub use config::{EngineConfig, ProviderConfig};
pub use engine::MoodEngine;
pub use error::{EngineError, Result};
