//! Static lexicon: keyword sets, the intensity-adverb scale, and the
//! canned explanation table.
//!
//! All of this is immutable process-wide data. `Lexicon::builtin()` hands
//! out a shared reference; components receive it by injection rather than
//! reaching for a global.

use super::models::{IntensityBand, MoodCategory};
use once_cell::sync::Lazy;

/// Keyword lists per category — zero allocation, matched as substrings of
/// the lowercased input.
const HAPPY_KEYWORDS: &[&str] = &[
    "happy", "joy", "excited", "great", "amazing", "wonderful", "fantastic", "cheerful", "elated",
];
const SAD_KEYWORDS: &[&str] = &[
    "sad", "depressed", "down", "blue", "melancholy", "upset", "crying", "tears", "heartbroken",
];
const ANXIOUS_KEYWORDS: &[&str] = &[
    "anxious", "worried", "nervous", "stressed", "panic", "fear", "overwhelmed", "tense",
];
const ANGRY_KEYWORDS: &[&str] = &[
    "angry", "mad", "furious", "irritated", "frustrated", "rage", "annoyed", "pissed",
];
const TIRED_KEYWORDS: &[&str] = &[
    "tired", "exhausted", "drained", "weary", "sleepy", "fatigue", "worn out", "depleted",
];
const NEUTRAL_KEYWORDS: &[&str] = &["okay", "fine", "normal", "average", "meh", "alright"];
const MIXED_KEYWORDS: &[&str] = &[
    "confused", "mixed", "complicated", "conflicted", "unsure", "complex",
];

/// Intensity adverbs in precedence order: the first one found in the text
/// wins. The order is fixed here so results never depend on map iteration
/// order.
pub const INTENSITY_ADVERBS: &[(&str, u8)] = &[
    ("extremely", 10),
    ("very", 8),
    ("really", 7),
    ("quite", 6),
    ("somewhat", 4),
    ("a bit", 3),
    ("slightly", 2),
    ("barely", 1),
];

static BUILTIN: Lazy<Lexicon> = Lazy::new(Lexicon::new);

/// The static keyword-to-category mapping plus explanation templates.
pub struct Lexicon {
    _private: (),
}

impl Lexicon {
    fn new() -> Self {
        Self { _private: () }
    }

    /// Shared reference to the process-wide lexicon.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Keywords for one category.
    pub fn keywords(&self, category: MoodCategory) -> &'static [&'static str] {
        match category {
            MoodCategory::Happy => HAPPY_KEYWORDS,
            MoodCategory::Sad => SAD_KEYWORDS,
            MoodCategory::Anxious => ANXIOUS_KEYWORDS,
            MoodCategory::Angry => ANGRY_KEYWORDS,
            MoodCategory::Tired => TIRED_KEYWORDS,
            MoodCategory::Neutral => NEUTRAL_KEYWORDS,
            MoodCategory::Mixed => MIXED_KEYWORDS,
        }
    }

    /// Count keyword hits for one category in already-lowercased text.
    pub fn count_hits(&self, category: MoodCategory, lowered: &str) -> usize {
        self.keywords(category)
            .iter()
            .filter(|kw| lowered.contains(**kw))
            .count()
    }

    /// True if any keyword of the category appears in the lowercased text.
    pub fn any_hit(&self, category: MoodCategory, lowered: &str) -> bool {
        self.keywords(category).iter().any(|kw| lowered.contains(*kw))
    }

    /// Canned explanation for a (category, band) pair. 21 fixed strings.
    pub fn explanation(&self, category: MoodCategory, band: IntensityBand) -> &'static str {
        use IntensityBand::*;
        use MoodCategory::*;
        match (category, band) {
            (Happy, Low) => "I can sense some happiness in you today. That's wonderful!",
            (Happy, Medium) => "You're feeling pretty good! I love seeing your positive energy.",
            (Happy, High) => "You're radiating joy! This is beautiful to witness.",
            (Sad, Low) => "I can feel a bit of sadness. I'm here with you.",
            (Sad, Medium) => "You're going through a tough time. You're not alone in this.",
            (Sad, High) => "I can feel your deep sadness. Please know that you're cared for.",
            (Anxious, Low) => "I sense some worry. Let's find some calm together.",
            (Anxious, Medium) => "Your anxiety is understandable. We can work through this.",
            (Anxious, High) => "I can feel your intense anxiety. You're safe right now.",
            (Angry, Low) => "I can sense some frustration. Your feelings are valid.",
            (Angry, Medium) => "You're feeling quite angry. Let's find a healthy way to process this.",
            (Angry, High) => "Your anger is intense right now. Let's channel this energy safely.",
            (Tired, Low) => "You seem a bit tired. Rest is important.",
            (Tired, Medium) => "You're feeling quite drained. You deserve care and rest.",
            (Tired, High) => "You're completely exhausted. Please be gentle with yourself.",
            (Neutral, Low) => "You're feeling pretty balanced today.",
            (Neutral, Medium) => "You seem to be in a neutral space. How can I support you?",
            (Neutral, High) => "You're feeling steady. What would be helpful right now?",
            (Mixed, Low) => "You're experiencing some complex feelings.",
            (Mixed, Medium) => "There's a lot going on emotionally. That's completely normal.",
            (Mixed, High) => "You're feeling many things at once. Let's take this step by step.",
        }
    }

    /// Explanation used when no usable input signal was given.
    pub fn invitation(&self) -> &'static str {
        "I'm here to support you. How are you feeling today?"
    }
}
