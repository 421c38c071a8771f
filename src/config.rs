//! Engine configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration for the engine and its HTTP surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Address the API server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Maximum accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Enrichment provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the enrichment service
    #[serde(default = "default_provider_url")]
    pub base_url: String,

    /// Bearer token (read from env MOOD_PROVIDER_API_KEY if not set)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Timeout for the insight operation in milliseconds
    #[serde(default = "default_insight_timeout_ms")]
    pub insight_timeout_ms: u64,

    /// Timeout for the affirmation operation in milliseconds
    #[serde(default = "default_affirmation_timeout_ms")]
    pub affirmation_timeout_ms: u64,

    /// Timeout for playlist generation in milliseconds. This is the slow
    /// path; generative playlists can take tens of seconds.
    #[serde(default = "default_playlist_timeout_ms")]
    pub playlist_timeout_ms: u64,

    /// Maximum songs kept from a provider playlist
    #[serde(default = "default_max_songs")]
    pub max_songs: usize,
}

// Default value functions
fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}
fn default_max_body_bytes() -> usize {
    64 * 1024
}
fn default_provider_url() -> String {
    "http://localhost:8001".to_string()
}
fn default_insight_timeout_ms() -> u64 {
    10_000
}
fn default_affirmation_timeout_ms() -> u64 {
    10_000
}
fn default_playlist_timeout_ms() -> u64 {
    60_000
}
fn default_max_songs() -> usize {
    12
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_body_bytes: default_max_body_bytes(),
            provider: ProviderConfig::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_provider_url(),
            api_key: None,
            insight_timeout_ms: default_insight_timeout_ms(),
            affirmation_timeout_ms: default_affirmation_timeout_ms(),
            playlist_timeout_ms: default_playlist_timeout_ms(),
            max_songs: default_max_songs(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn from_env(mut self) -> Self {
        if let Ok(val) = std::env::var("MOOD_BIND_ADDR") {
            self.bind_addr = val;
        }

        if let Ok(val) = std::env::var("MOOD_MAX_BODY_BYTES") {
            if let Ok(bytes) = val.parse() {
                self.max_body_bytes = bytes;
            }
        }

        self.provider = self.provider.from_env();
        self
    }
}

impl ProviderConfig {
    /// Load provider settings from environment variables.
    pub fn from_env(mut self) -> Self {
        if let Ok(val) = std::env::var("MOOD_PROVIDER_URL") {
            self.base_url = val;
        }

        if let Ok(val) = std::env::var("MOOD_PROVIDER_API_KEY") {
            self.api_key = Some(val);
        }

        if let Ok(val) = std::env::var("MOOD_INSIGHT_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                self.insight_timeout_ms = ms;
            }
        }

        if let Ok(val) = std::env::var("MOOD_AFFIRMATION_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                self.affirmation_timeout_ms = ms;
            }
        }

        if let Ok(val) = std::env::var("MOOD_PLAYLIST_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                self.playlist_timeout_ms = ms;
            }
        }

        if let Ok(val) = std::env::var("MOOD_MAX_SONGS") {
            if let Ok(max) = val.parse() {
                self.max_songs = max;
            }
        }

        self
    }

    /// Get insight timeout as Duration
    pub fn insight_timeout(&self) -> Duration {
        Duration::from_millis(self.insight_timeout_ms)
    }

    /// Get affirmation timeout as Duration
    pub fn affirmation_timeout(&self) -> Duration {
        Duration::from_millis(self.affirmation_timeout_ms)
    }

    /// Get playlist timeout as Duration
    pub fn playlist_timeout(&self) -> Duration {
        Duration::from_millis(self.playlist_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.provider.base_url, "http://localhost:8001");
        assert_eq!(config.provider.insight_timeout_ms, 10_000);
        assert_eq!(config.provider.playlist_timeout_ms, 60_000);
        assert_eq!(config.provider.max_songs, 12);
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("MOOD_PROVIDER_URL", "http://custom:9000");
        std::env::set_var("MOOD_PROVIDER_API_KEY", "test-key");
        std::env::set_var("MOOD_PLAYLIST_TIMEOUT_MS", "90000");

        let config = EngineConfig::default().from_env();

        assert_eq!(config.provider.base_url, "http://custom:9000");
        assert_eq!(config.provider.api_key, Some("test-key".to_string()));
        assert_eq!(config.provider.playlist_timeout_ms, 90_000);

        // Cleanup
        std::env::remove_var("MOOD_PROVIDER_URL");
        std::env::remove_var("MOOD_PROVIDER_API_KEY");
        std::env::remove_var("MOOD_PLAYLIST_TIMEOUT_MS");
    }

    #[test]
    fn test_duration_conversions() {
        let config = ProviderConfig::default();
        assert_eq!(config.insight_timeout(), Duration::from_secs(10));
        assert_eq!(config.affirmation_timeout(), Duration::from_secs(10));
        assert_eq!(config.playlist_timeout(), Duration::from_secs(60));
    }
}
