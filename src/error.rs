//! Crate-level error type

use crate::enrichment::EnrichmentError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Enrichment provider error: {0}")]
    Enrichment(#[from] EnrichmentError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_enrichment_errors() {
        let error = EngineError::from(EnrichmentError::EmptyPlaylist);
        assert!(matches!(
            error,
            EngineError::Enrichment(EnrichmentError::EmptyPlaylist)
        ));
        assert!(error.to_string().contains("empty song list"));
    }

    #[test]
    fn test_invalid_input_message() {
        let error = EngineError::InvalidInput("intensity 11 out of range 1-10".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid input: intensity 11 out of range 1-10"
        );
    }
}
