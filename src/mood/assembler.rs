//! Response assembler: pure merge of classifier, ranker, and enrichment
//! output into the payload returned to callers.

use super::models::{ClassifiedMood, Intensity, MoodCategory, Suggestion};
use serde::{Deserialize, Serialize};

/// Final inference payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodAnalysis {
    pub mood_type: MoodCategory,
    pub intensity: Intensity,
    pub confidence: f32,
    pub suggestions: Vec<Suggestion>,
    pub message: String,
}

/// Merge the classification, the ranked suggestions, and an optional
/// enrichment fragment. The fragment, when present, is appended to the
/// base explanation with a single space.
pub fn assemble(
    classified: ClassifiedMood,
    suggestions: Vec<Suggestion>,
    insight: Option<String>,
) -> MoodAnalysis {
    let message = match insight {
        Some(fragment) => format!("{} {}", classified.explanation, fragment),
        None => classified.explanation,
    };

    MoodAnalysis {
        mood_type: classified.category,
        intensity: classified.intensity,
        confidence: classified.confidence,
        suggestions,
        message,
    }
}
