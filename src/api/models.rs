//! Request/response DTOs for the HTTP surface.
//!
//! Boundary DTOs carry raw strings/integers so invalid caller input can be
//! rejected with a structured 400 before the core ever sees it; the core
//! itself assumes validated input.

use crate::error::EngineError;
use crate::mood::{Intensity, MoodCategory, MoodInput};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Analyze request: any of the three input shapes, raw at the boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub mood_type: Option<String>,
    pub intensity: Option<i64>,
    pub text_input: Option<String>,
    pub quiz_responses: Option<HashMap<String, serde_json::Value>>,
}

impl AnalyzeRequest {
    /// Validate and convert into the core input shape.
    pub fn into_mood_input(self) -> Result<MoodInput, EngineError> {
        let mood_type = self.mood_type.map(|raw| parse_category(&raw)).transpose()?;
        let intensity = self.intensity.map(parse_intensity).transpose()?;

        Ok(MoodInput {
            mood_type,
            intensity,
            text_input: self.text_input,
            quiz_responses: self.quiz_responses,
        })
    }
}

/// Playlist request; explicit mood and intensity are required here.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistApiRequest {
    pub mood_type: String,
    pub intensity: i64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
}

fn default_duration_minutes() -> u32 {
    30
}

impl PlaylistApiRequest {
    pub fn validate(&self) -> Result<(MoodCategory, Intensity), EngineError> {
        Ok((
            parse_category(&self.mood_type)?,
            parse_intensity(self.intensity)?,
        ))
    }
}

/// Affirmation request.
#[derive(Debug, Clone, Deserialize)]
pub struct AffirmationApiRequest {
    pub mood_type: String,
    pub intensity: i64,
    pub user_name: Option<String>,
    pub context: Option<String>,
}

impl AffirmationApiRequest {
    pub fn validate(&self) -> Result<(MoodCategory, Intensity), EngineError> {
        Ok((
            parse_category(&self.mood_type)?,
            parse_intensity(self.intensity)?,
        ))
    }
}

fn parse_category(raw: &str) -> Result<MoodCategory, EngineError> {
    MoodCategory::parse(raw)
        .ok_or_else(|| EngineError::InvalidInput(format!("Unknown mood_type '{}'", raw)))
}

fn parse_intensity(raw: i64) -> Result<Intensity, EngineError> {
    u8::try_from(raw)
        .ok()
        .and_then(Intensity::new)
        .ok_or_else(|| EngineError::InvalidInput(format!("intensity {} out of range 1-10", raw)))
}

/// API error details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Standard error codes
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const TIMEOUT: &str = "TIMEOUT";
    pub const UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_accepts_valid_explicit_pair() {
        let request = AnalyzeRequest {
            mood_type: Some("anxious".to_string()),
            intensity: Some(7),
            ..Default::default()
        };
        let input = request.into_mood_input().unwrap();
        assert_eq!(input.mood_type, Some(MoodCategory::Anxious));
        assert_eq!(input.intensity.unwrap().get(), 7);
    }

    #[test]
    fn test_analyze_request_rejects_unknown_category() {
        let request = AnalyzeRequest {
            mood_type: Some("ecstatic".to_string()),
            ..Default::default()
        };
        let error = request.into_mood_input().unwrap_err();
        assert!(matches!(error, EngineError::InvalidInput(_)));
        assert!(error.to_string().contains("ecstatic"));
    }

    #[test]
    fn test_analyze_request_rejects_out_of_range_intensity() {
        for raw in [0, 11, -4, 1000] {
            let request = AnalyzeRequest {
                intensity: Some(raw),
                ..Default::default()
            };
            assert!(request.into_mood_input().is_err(), "intensity {}", raw);
        }
    }

    #[test]
    fn test_playlist_request_validates() {
        let request = PlaylistApiRequest {
            mood_type: "sad".to_string(),
            intensity: 6,
            genres: vec![],
            duration_minutes: 30,
        };
        let (category, intensity) = request.validate().unwrap();
        assert_eq!(category, MoodCategory::Sad);
        assert_eq!(intensity.get(), 6);
    }
}
