//! Data models for mood classification and suggestion ranking

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Closed set of mood categories.
///
/// The declaration order is the canonical tie-break order for keyword
/// scoring: when two categories score the same number of hits, the one
/// listed first here wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Happy,
    Neutral,
    Anxious,
    Sad,
    Angry,
    Tired,
    Mixed,
}

impl MoodCategory {
    /// All categories in canonical tie-break order.
    pub const ALL: [MoodCategory; 7] = [
        Self::Happy,
        Self::Neutral,
        Self::Anxious,
        Self::Sad,
        Self::Angry,
        Self::Tired,
        Self::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Neutral => "neutral",
            Self::Anxious => "anxious",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Tired => "tired",
            Self::Mixed => "mixed",
        }
    }

    /// Parse a category from its lowercase wire name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// Mood intensity on a 1-10 scale. 1 = barely present, 10 = overwhelming.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Construct an intensity, rejecting values outside 1..=10.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Construct an intensity, clamping into 1..=10.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Derive the coarse band. The boundaries here are the single source
    /// of truth shared by the classifier and the ranker.
    pub fn band(&self) -> IntensityBand {
        match self.0 {
            0..=3 => IntensityBand::Low,
            4..=7 => IntensityBand::Medium,
            _ => IntensityBand::High,
        }
    }
}

impl TryFrom<u8> for Intensity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("intensity {} out of range 1-10", value))
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> u8 {
        value.0
    }
}

/// Coarse grouping of the intensity scale used to index decision tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntensityBand {
    Low,
    Medium,
    High,
}

/// Result of one inference call. Immutable once produced; the engine does
/// not persist it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedMood {
    pub category: MoodCategory,
    pub intensity: Intensity,
    /// In [0, 1]. Exactly 1.0 only when the input carried an explicit
    /// category and intensity.
    pub confidence: f32,
    pub explanation: String,
}

/// Kind of coping action a suggestion proposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Music,
    Breathing,
    Journal,
    Game,
    Audio,
    Affirmation,
}

/// A single coping-action suggestion. Lists handed to callers are ordered
/// by priority ascending, ties kept in table insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    /// 1 = highest.
    pub priority: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl Suggestion {
    pub fn new(
        kind: SuggestionKind,
        title: &str,
        description: &str,
        priority: u32,
    ) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            priority,
            duration_secs: None,
            metadata: HashMap::new(),
        }
    }

    pub fn with_duration(mut self, secs: u32) -> Self {
        self.duration_secs = Some(secs);
        self
    }
}

/// The three input shapes accepted by the classifier. Fields are checked
/// in priority order: explicit pair, then free text, then quiz answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_type: Option<MoodCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_responses: Option<HashMap<String, serde_json::Value>>,
}

impl MoodInput {
    pub fn explicit(mood_type: MoodCategory, intensity: Intensity) -> Self {
        Self {
            mood_type: Some(mood_type),
            intensity: Some(intensity),
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text_input: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn quiz(responses: HashMap<String, serde_json::Value>) -> Self {
        Self {
            quiz_responses: Some(responses),
            ..Default::default()
        }
    }
}
