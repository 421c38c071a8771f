//! Suggestion ranker: a static (category, intensity band) decision table.
//!
//! Pure function — no I/O, no randomness, no mutable state. Lists come
//! back priority-sorted by construction and are capped at
//! [`MAX_SUGGESTIONS`] entries.

use super::models::{Intensity, IntensityBand, MoodCategory, Suggestion, SuggestionKind};

/// A ranked list never exceeds this many entries.
pub const MAX_SUGGESTIONS: usize = 4;

/// Deterministic suggestion ranker over the built-in decision table.
pub struct SuggestionRanker;

impl SuggestionRanker {
    pub fn new() -> Self {
        Self
    }

    /// Ordered, capped suggestion list for a mood. Categories with partial
    /// tables resolve uncovered bands to their lowest covered band; the
    /// result is never empty.
    pub fn rank(&self, category: MoodCategory, intensity: Intensity) -> Vec<Suggestion> {
        let mut suggestions = branch(category, intensity.band());
        if suggestions.is_empty() {
            // Unreachable with the current table, but the contract says a
            // caller always gets at least one generic suggestion.
            suggestions = branch(MoodCategory::Neutral, IntensityBand::Medium);
        }
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

impl Default for SuggestionRanker {
    fn default() -> Self {
        Self::new()
    }
}

fn branch(category: MoodCategory, band: IntensityBand) -> Vec<Suggestion> {
    use IntensityBand::*;
    use MoodCategory::*;
    use SuggestionKind::*;

    match (category, band) {
        (Happy, High) => vec![
            Suggestion::new(Music, "Celebration Playlist", "Upbeat music to match your joy", 1),
            Suggestion::new(Journal, "Joy Jar Entry", "Capture this moment forever", 2),
        ],
        // No medium branch for happy: fall through to the low branch.
        (Happy, Medium) | (Happy, Low) => vec![
            Suggestion::new(Music, "Feel-Good Mix", "Light, positive tunes", 1),
            Suggestion::new(Affirmation, "Positive Affirmations", "Set positive intentions", 2),
        ],
        (Tired, High) => vec![
            Suggestion::new(Audio, "Sleep Sounds", "Gentle sounds for deep rest", 1)
                .with_duration(1800),
            Suggestion::new(Breathing, "Restorative Breathing", "Breathing for exhaustion", 2)
                .with_duration(600),
        ],
        (Tired, Medium) => vec![
            Suggestion::new(Music, "Calming Music", "Soft music for tired souls", 1),
            Suggestion::new(
                Journal,
                "Gentle Reflection",
                "What's one thing you're proud of today?",
                2,
            ),
        ],
        (Tired, Low) => vec![
            Suggestion::new(Music, "Gentle Energy", "Soft music to lift your spirits", 1),
            Suggestion::new(Breathing, "Energizing Breath", "Gentle breathing to restore energy", 2)
                .with_duration(300),
        ],
        (Anxious, High) => vec![
            Suggestion::new(Breathing, "4-7-8 Breathing", "Immediate anxiety relief", 1)
                .with_duration(480),
            Suggestion::new(Affirmation, "Calming Affirmations", "Gentle anxiety relief", 2),
        ],
        (Anxious, Medium) => vec![
            Suggestion::new(Audio, "Calming Sounds", "Nature sounds to soothe anxiety", 1),
            Suggestion::new(Breathing, "Box Breathing", "Structured breathing for calm", 2)
                .with_duration(360),
        ],
        (Anxious, Low) => vec![
            Suggestion::new(Music, "Peaceful Music", "Gentle music for mild anxiety", 1),
            Suggestion::new(Journal, "Worry Journal", "Write down what's on your mind", 2),
        ],
        (Sad, High) => vec![
            Suggestion::new(Affirmation, "Comfort Affirmations", "Warm, supportive messages", 1),
            Suggestion::new(Audio, "Comforting Sounds", "Warm, supportive audio", 2),
        ],
        (Sad, Medium) | (Sad, Low) => vec![
            Suggestion::new(Music, "Gentle Music", "Soft, understanding melodies", 1),
            Suggestion::new(Journal, "Express Feelings", "Sometimes writing helps", 2),
        ],
        (Angry, High) => vec![
            Suggestion::new(Breathing, "Cooling Breath", "Box breathing to release tension", 1)
                .with_duration(360),
            Suggestion::new(Affirmation, "Grounding Affirmations", "Messages to channel energy", 2),
        ],
        (Angry, Medium) | (Angry, Low) => vec![
            Suggestion::new(Journal, "Vent Writing", "Write out your frustrations", 1),
            Suggestion::new(Music, "Grounding Music", "Music to center yourself", 2),
        ],
        // Flat lists regardless of band.
        (Neutral, _) => vec![
            Suggestion::new(Music, "Ambient Music", "Background music for reflection", 1),
            Suggestion::new(Journal, "Daily Check-in", "How was your day really?", 2),
            Suggestion::new(Game, "Gratitude Game", "Find three things you're grateful for", 3),
        ],
        (Mixed, _) => vec![
            Suggestion::new(Journal, "Free Writing", "Write whatever comes to mind", 1),
            Suggestion::new(Breathing, "Centering Breath", "Find your center in complexity", 2)
                .with_duration(450),
            Suggestion::new(
                Affirmation,
                "Understanding Affirmations",
                "Support for complex emotions",
                3,
            ),
        ],
    }
}
