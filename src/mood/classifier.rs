//! Mood classifier: turns one of three input shapes into a
//! `ClassifiedMood`. Fails soft by design — there is no error channel,
//! every path resolves to a best-effort result.

use super::lexicon::{Lexicon, INTENSITY_ADVERBS};
use super::models::{ClassifiedMood, Intensity, MoodCategory, MoodInput};
use std::collections::HashMap;
use tracing::debug;

/// Confidence assigned when free text contains no recognizable keyword.
const NO_SIGNAL_TEXT_CONFIDENCE: f32 = 0.3;
/// Confidence assigned to quiz-derived classifications.
const QUIZ_CONFIDENCE: f32 = 0.8;
/// Confidence assigned when no usable input was given at all.
const DEFAULT_CONFIDENCE: f32 = 0.5;
/// Baseline intensity when the text carries no adverb cue.
const DEFAULT_INTENSITY: u8 = 5;

/// Deterministic rule-based classifier over the static lexicon.
pub struct MoodClassifier {
    lexicon: &'static Lexicon,
}

impl MoodClassifier {
    pub fn new(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    /// Classify an input. Dispatch priority: explicit pair, free text,
    /// quiz answers, then the neutral default.
    pub fn classify(&self, input: &MoodInput) -> ClassifiedMood {
        if let (Some(category), Some(intensity)) = (input.mood_type, input.intensity) {
            return ClassifiedMood {
                category,
                intensity,
                confidence: 1.0,
                explanation: self.lexicon.explanation(category, intensity.band()).to_string(),
            };
        }

        if let Some(text) = input.text_input.as_deref() {
            return self.classify_text(text);
        }

        if let Some(responses) = input.quiz_responses.as_ref() {
            return self.classify_quiz(responses);
        }

        ClassifiedMood {
            category: MoodCategory::Neutral,
            intensity: Intensity::clamped(DEFAULT_INTENSITY as i64),
            confidence: DEFAULT_CONFIDENCE,
            explanation: self.lexicon.invitation().to_string(),
        }
    }

    fn classify_text(&self, text: &str) -> ClassifiedMood {
        let lowered = text.to_lowercase();

        let mut winner: Option<(MoodCategory, usize)> = None;
        for category in MoodCategory::ALL {
            let hits = self.lexicon.count_hits(category, &lowered);
            if hits > 0 && winner.map_or(true, |(_, best)| hits > best) {
                winner = Some((category, hits));
            }
        }

        let (category, confidence) = match winner {
            Some((category, hits)) => (category, (hits as f32 / 3.0).min(1.0)),
            None => (MoodCategory::Neutral, NO_SIGNAL_TEXT_CONFIDENCE),
        };

        let intensity = estimate_intensity(text, &lowered);
        debug!(
            category = category.as_str(),
            intensity = intensity.get(),
            confidence,
            "classified free text"
        );

        ClassifiedMood {
            category,
            intensity,
            confidence,
            explanation: self.lexicon.explanation(category, intensity.band()).to_string(),
        }
    }

    fn classify_quiz(&self, responses: &HashMap<String, serde_json::Value>) -> ClassifiedMood {
        let mut scores: [usize; 7] = [0; 7];

        for answer in responses.values() {
            // Only string answers contribute to category scoring. Numeric
            // answers are accepted but ignored — a known limitation kept
            // for parity with the quiz format this engine was built for.
            if let Some(text) = answer.as_str() {
                let lowered = text.to_lowercase();
                for (i, category) in MoodCategory::ALL.iter().enumerate() {
                    if self.lexicon.any_hit(*category, &lowered) {
                        scores[i] += 1;
                    }
                }
            }
        }

        let total: usize = scores.iter().sum();
        let category = if total == 0 {
            MoodCategory::Neutral
        } else {
            // Highest score wins; ties resolve to the earlier category in
            // canonical order because only strictly greater scores replace
            // the running winner.
            let mut best = (MoodCategory::ALL[0], scores[0]);
            for (i, category) in MoodCategory::ALL.iter().enumerate().skip(1) {
                if scores[i] > best.1 {
                    best = (*category, scores[i]);
                }
            }
            best.0
        };

        let intensity = Intensity::clamped(total as i64);
        debug!(
            category = category.as_str(),
            intensity = intensity.get(),
            answers = responses.len(),
            "classified quiz responses"
        );

        ClassifiedMood {
            category,
            intensity,
            confidence: QUIZ_CONFIDENCE,
            explanation: self.lexicon.explanation(category, intensity.band()).to_string(),
        }
    }
}

/// Estimate intensity from free text: first adverb in precedence order
/// wins, then punctuation/caps adjustment. The caps check looks at the
/// original text, not the lowered copy.
fn estimate_intensity(original: &str, lowered: &str) -> Intensity {
    let mut base = DEFAULT_INTENSITY;
    for (adverb, value) in INTENSITY_ADVERBS {
        if lowered.contains(adverb) {
            base = *value;
            break;
        }
    }

    if original.contains("!!!") || is_shouting(original) {
        base = (base + 2).min(Intensity::MAX);
    } else if original.contains('!') {
        base = (base + 1).min(Intensity::MAX);
    }

    Intensity::clamped(base as i64)
}

/// True when the text contains letters and every letter is uppercase.
fn is_shouting(text: &str) -> bool {
    let mut has_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::models::IntensityBand;
    use serde_json::json;

    fn classifier() -> MoodClassifier {
        MoodClassifier::new(Lexicon::builtin())
    }

    #[test]
    fn test_explicit_input_passes_through_with_full_confidence() {
        let input = MoodInput::explicit(MoodCategory::Angry, Intensity::new(9).unwrap());
        let result = classifier().classify(&input);
        assert_eq!(result.category, MoodCategory::Angry);
        assert_eq!(result.intensity.get(), 9);
        assert_eq!(result.confidence, 1.0);
        assert!(!result.explanation.is_empty());
    }

    #[test]
    fn test_text_extremely_happy() {
        let result = classifier().classify(&MoodInput::text("I feel extremely happy"));
        assert_eq!(result.category, MoodCategory::Happy);
        assert!(result.intensity.get() >= 8);
        assert!(result.confidence < 1.0);
    }

    #[test]
    fn test_text_a_bit_sad() {
        let result = classifier().classify(&MoodInput::text("I'm a bit sad"));
        assert_eq!(result.category, MoodCategory::Sad);
        assert!(result.intensity.get() <= 4);
    }

    #[test]
    fn test_text_quite_anxious() {
        let result = classifier().classify(&MoodInput::text("I feel quite anxious"));
        assert_eq!(result.category, MoodCategory::Anxious);
        assert!((5..=7).contains(&result.intensity.get()));
    }

    #[test]
    fn test_text_without_keywords_defaults_to_neutral() {
        let result = classifier().classify(&MoodInput::text("xyz abc 123"));
        assert_eq!(result.category, MoodCategory::Neutral);
        assert_eq!(result.confidence, NO_SIGNAL_TEXT_CONFIDENCE);
    }

    #[test]
    fn test_text_confidence_scales_with_hits() {
        let result = classifier().classify(&MoodInput::text("happy and excited"));
        assert_eq!(result.category, MoodCategory::Happy);
        assert!((result.confidence - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_text_tie_resolves_to_canonical_order() {
        // One happy hit and one sad hit: happy precedes sad in the
        // canonical category order.
        let result = classifier().classify(&MoodInput::text("happy but also sad"));
        assert_eq!(result.category, MoodCategory::Happy);
    }

    #[test]
    fn test_exclamation_raises_intensity() {
        let plain = classifier().classify(&MoodInput::text("I am so mad"));
        let shout = classifier().classify(&MoodInput::text("I am so mad!!!"));
        assert_eq!(plain.intensity.get(), 5);
        assert_eq!(shout.intensity.get(), 7);
    }

    #[test]
    fn test_all_caps_raises_intensity() {
        let result = classifier().classify(&MoodInput::text("I AM FURIOUS"));
        assert_eq!(result.category, MoodCategory::Angry);
        assert_eq!(result.intensity.get(), 7);
    }

    #[test]
    fn test_adverb_precedence_first_listed_wins() {
        // Both "extremely" and "slightly" appear; "extremely" is earlier
        // in the precedence list so it sets the base.
        let result = classifier().classify(&MoodInput::text("extremely yet slightly worried"));
        assert_eq!(result.intensity.get(), 10);
    }

    #[test]
    fn test_quiz_string_answers_score_categories() {
        let responses = HashMap::from([
            ("q1".to_string(), json!("I feel worried about work")),
            ("q2".to_string(), json!("pretty stressed lately")),
            ("q3".to_string(), json!(7)),
        ]);
        let result = classifier().classify(&MoodInput::quiz(responses));
        assert_eq!(result.category, MoodCategory::Anxious);
        assert_eq!(result.confidence, QUIZ_CONFIDENCE);
        assert_eq!(result.intensity.get(), 2);
    }

    #[test]
    fn test_quiz_numeric_only_defaults_to_neutral() {
        let responses = HashMap::from([
            ("q1".to_string(), json!(9)),
            ("q2".to_string(), json!(2)),
        ]);
        let result = classifier().classify(&MoodInput::quiz(responses));
        assert_eq!(result.category, MoodCategory::Neutral);
        assert_eq!(result.intensity.get(), 1);
    }

    #[test]
    fn test_empty_input_defaults() {
        let result = classifier().classify(&MoodInput::default());
        assert_eq!(result.category, MoodCategory::Neutral);
        assert_eq!(result.intensity.get(), 5);
        assert_eq!(result.confidence, DEFAULT_CONFIDENCE);
    }

    #[test]
    fn test_band_agrees_with_explanation_band() {
        // The explanation is keyed by the same band derivation the ranker
        // uses; spot-check the boundary values.
        for value in 1..=10u8 {
            let intensity = Intensity::new(value).unwrap();
            let result = classifier()
                .classify(&MoodInput::explicit(MoodCategory::Tired, intensity));
            let expected = Lexicon::builtin().explanation(MoodCategory::Tired, intensity.band());
            assert_eq!(result.explanation, expected);
            assert_eq!(
                intensity.band(),
                match value {
                    1..=3 => IntensityBand::Low,
                    4..=7 => IntensityBand::Medium,
                    _ => IntensityBand::High,
                }
            );
        }
    }
}
