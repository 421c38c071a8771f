//! Static, mood-indexed affirmation bank used whenever the provider
//! cannot produce a usable affirmation set. Requires no I/O and completes
//! synchronously, so a cancelled provider call can never take this path
//! down with it.

use super::models::AffirmationSet;
use crate::mood::MoodCategory;

const BREATHING_INSTRUCTION: &str =
    "Take a slow, deep breath in for 4 counts, hold for 4, then exhale for 6 counts";

fn affirmations_for(category: MoodCategory) -> [&'static str; 5] {
    match category {
        MoodCategory::Happy => [
            "I deserve this happiness and joy",
            "I am grateful for this beautiful moment",
            "I radiate positivity and light",
            "I celebrate my achievements and growth",
            "I share my joy with the world around me",
        ],
        MoodCategory::Sad => [
            "I allow myself to feel and process my emotions",
            "I am worthy of love and compassion",
            "This sadness is temporary and will pass",
            "I am stronger than I know",
            "I give myself permission to heal at my own pace",
        ],
        MoodCategory::Anxious => [
            "I am safe in this moment",
            "I can handle whatever comes my way",
            "I breathe deeply and find my center",
            "I trust in my ability to cope",
            "I am grounded and present",
        ],
        MoodCategory::Angry => [
            "I acknowledge my anger without judgment",
            "I can express my feelings in healthy ways",
            "I have the power to choose my response",
            "I release what I cannot control",
            "I channel my energy toward positive change",
        ],
        MoodCategory::Tired => [
            "I deserve rest and restoration",
            "I honor my body's need for peace",
            "I am gentle with myself today",
            "I have done enough for today",
            "I allow myself to simply be",
        ],
        MoodCategory::Neutral => [
            "I am exactly where I need to be",
            "I trust the process of life",
            "I am open to whatever this moment brings",
            "I find peace in the present",
            "I am enough, just as I am",
        ],
        MoodCategory::Mixed => [
            "I can hold multiple feelings at once",
            "I am complex and that's perfectly okay",
            "I give myself space to feel everything",
            "I trust my emotional wisdom",
            "I am learning and growing through this experience",
        ],
    }
}

/// True when the category warrants a breathing instruction in the
/// fallback set.
fn needs_breathing(category: MoodCategory) -> bool {
    matches!(
        category,
        MoodCategory::Anxious | MoodCategory::Angry | MoodCategory::Sad
    )
}

/// Build the static fallback affirmation set for a category.
pub fn affirmation_fallback(category: MoodCategory, user_name: Option<&str>) -> AffirmationSet {
    let personalized_message = match user_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!(
            "{}, you're being so brave by acknowledging your {} feelings. That takes real courage.",
            name,
            category.as_str()
        ),
        None => format!(
            "You're being so brave by acknowledging your {} feelings. That takes real courage.",
            category.as_str()
        ),
    };

    AffirmationSet {
        affirmations: affirmations_for(category)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        personalized_message,
        breathing_instruction: needs_breathing(category)
            .then(|| BREATHING_INSTRUCTION.to_string()),
    }
}
