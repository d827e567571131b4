//! Configuration models.
//!
//! Two files live in the showcase config directory:
//!
//! - `secret.json`: API credentials ([`SecretConfig`])
//! - `config.toml`: non-secret application settings ([`AppConfig`])

use crate::latency::SimulatedLatency;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_HANDOFF_DELAY_MS: u64 = 2000;

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .finish()
    }
}

/// Root structure of config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub advisor: AdvisorSettings,
}

/// `[advisor]` table of config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorSettings {
    /// Gemini model name; secret.json's `model_name` takes precedence.
    pub model: String,
    pub base_url: String,
    /// Simulated delay before the hand-off confirmation appears.
    pub handoff_delay_ms: u64,
    /// Outbound request timeout. `None` keeps the HTTP client's default.
    pub request_timeout_secs: Option<u64>,
    /// Overrides the default greeting. An empty string disables it.
    pub greeting: Option<String>,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            handoff_delay_ms: DEFAULT_HANDOFF_DELAY_MS,
            request_timeout_secs: None,
            greeting: None,
        }
    }
}

impl AdvisorSettings {
    pub fn handoff_latency(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.handoff_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
