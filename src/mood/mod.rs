//! Deterministic mood core: lexicon, classifier, suggestion ranker, and
//! response assembler.
//!
//! Everything in this module is pure and synchronous. The lexicon and the
//! decision table are immutable process-wide data; repeated calls with the
//! same input always produce the same output.

pub mod assembler;
pub mod classifier;
pub mod lexicon;
pub mod models;
pub mod ranker;

pub use assembler::{assemble, MoodAnalysis};
pub use classifier::MoodClassifier;
pub use lexicon::Lexicon;
pub use models::{
    ClassifiedMood, Intensity, IntensityBand, MoodCategory, MoodInput, Suggestion, SuggestionKind,
};
pub use ranker::{SuggestionRanker, MAX_SUGGESTIONS};
