//! Wire contracts exchanged with the enrichment provider, plus the
//! validated domain types the orchestrator hands to callers.
//!
//! Only the fields named here are part of the contract; anything else the
//! provider sends is ignored.

use crate::mood::{Intensity, MoodCategory};
use serde::{Deserialize, Serialize};

/// Request body for the mood-insight operation.
#[derive(Debug, Clone, Serialize)]
pub struct InsightRequest {
    pub mood_type: MoodCategory,
    pub intensity: Intensity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Provider response for the insight operation. Usable iff `ai_insights`
/// is a non-empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct InsightResponse {
    #[serde(default)]
    pub ai_insights: Option<String>,
}

/// Request body for playlist generation.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistRequest {
    pub mood_type: MoodCategory,
    pub intensity: Intensity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    pub duration_minutes: u32,
}

/// One (title, artist) pair from the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

/// Raw provider response for playlist generation. Usable iff `songs` is
/// non-empty after validation.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistResponse {
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub playlist_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Validated playlist returned by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlaylist {
    pub name: String,
    pub description: String,
    pub songs: Vec<Song>,
}

/// Request body for affirmation generation.
#[derive(Debug, Clone, Serialize)]
pub struct AffirmationRequest {
    pub mood_type: MoodCategory,
    pub intensity: Intensity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Raw provider response for affirmations. Usable iff `affirmations` has
/// at least one non-empty string and `personalized_message` is present.
#[derive(Debug, Clone, Deserialize)]
pub struct AffirmationResponse {
    #[serde(default)]
    pub affirmations: Vec<String>,
    #[serde(default)]
    pub personalized_message: Option<String>,
    #[serde(default)]
    pub breathing_instruction: Option<String>,
}

/// Affirmation set returned by the orchestrator; always usable, whether it
/// came from the provider or the static fallback bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffirmationSet {
    pub affirmations: Vec<String>,
    pub personalized_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breathing_instruction: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_response_tolerates_missing_optionals() {
        let parsed: PlaylistResponse = serde_json::from_str(
            r#"{"songs": [{"title": "Weightless", "artist": "Marconi Union"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.songs.len(), 1);
        assert!(parsed.playlist_name.is_none());
    }

    #[test]
    fn test_playlist_response_ignores_extra_fields() {
        let parsed: PlaylistResponse = serde_json::from_str(
            r#"{"songs": [], "mood_description": "calming", "model": "gemma"}"#,
        )
        .unwrap();
        assert!(parsed.songs.is_empty());
    }

    #[test]
    fn test_insight_request_wire_shape() {
        let request = InsightRequest {
            mood_type: MoodCategory::Anxious,
            intensity: Intensity::new(7).unwrap(),
            context: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["mood_type"], "anxious");
        assert_eq!(value["intensity"], 7);
        assert!(value.get("context").is_none());
    }
}
