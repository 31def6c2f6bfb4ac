//! Configuration types for the analyzers.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`AnalyzerConfig`] - Local pattern-matching analyzer settings
//! - [`AiConfig`] - LLM-assisted analyzer settings (endpoint, key, model)
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AiConfig, AnalyzerConfig};
//!
//! let local = AnalyzerConfig::new().with_reading_list_marker("To read:");
//! assert_eq!(local.reading_list_markers.len(), 3);
//!
//! let ai = AiConfig::new("sk-test")
//!     .with_model("gpt-4o")
//!     .with_timeout_secs(30);
//! assert_eq!(ai.model, "gpt-4o");
//! ```

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the model.
pub const MODEL_ENV: &str = "OPENAI_MODEL";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Default chat-completion model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default API base URL (without the `/chat/completions` suffix).
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Developer-role instruction sent ahead of the chat log.
pub const DEFAULT_INSTRUCTIONS: &str = "Extract and categorize different content types: \
Smart content categorization, Theme detection, Pattern recognition, Content relationship mapping. \
Also Show relationships between parsed content, Group similar topics/themes, \
Display basic frequency analysis, Present insights in a clean, organized way";

/// Configuration for the local analyzer.
///
/// An entry that contains none of `http` or `"` but contains one of the
/// reading-list markers has its dash-prefixed lines collected as reading
/// list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Literal markers that identify a reading-list entry
    /// (default: `"Reading list:"`, `"Need to finish these"`)
    pub reading_list_markers: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            reading_list_markers: vec![
                "Reading list:".to_string(),
                "Need to finish these".to_string(),
            ],
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds another reading-list marker.
    #[must_use]
    pub fn with_reading_list_marker(mut self, marker: impl Into<String>) -> Self {
        self.reading_list_markers.push(marker.into());
        self
    }

    /// Replaces the reading-list markers.
    #[must_use]
    pub fn with_reading_list_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reading_list_markers = markers.into_iter().map(Into::into).collect();
        self
    }
}

/// Configuration for the LLM-assisted analyzer.
///
/// The `Debug` implementation redacts the API key.
#[derive(Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Bearer token for the chat-completion API. Never serialized; reads
    /// back as empty.
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Model name (default: `gpt-4o-mini`)
    pub model: String,

    /// API base URL (default: `https://api.openai.com/v1`)
    pub base_url: String,

    /// Request timeout in seconds (default: 60)
    pub timeout_secs: u64,

    /// Developer-role instruction string
    pub instructions: String,
}

impl AiConfig {
    /// Creates a configuration with the given API key and defaults for
    /// everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
        }
    }

    /// Builds a configuration from `OPENAI_API_KEY`, `OPENAI_MODEL` and
    /// `OPENAI_BASE_URL`. Only the key is required.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ChatlensError::missing_config(API_KEY_ENV))?;

        let mut config = Self::new(api_key);
        if let Ok(model) = env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config = config.with_base_url(base_url);
            }
        }
        Ok(config)
    }

    /// Sets the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Sets the developer-role instruction string.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Full URL of the chat-completion endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_config_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(
            config.reading_list_markers,
            vec!["Reading list:", "Need to finish these"]
        );
    }

    #[test]
    fn test_analyzer_config_builder() {
        let config = AnalyzerConfig::new().with_reading_list_markers(["To read:"]);
        assert_eq!(config.reading_list_markers, vec!["To read:"]);

        let config = config.with_reading_list_marker("Backlog:");
        assert_eq!(config.reading_list_markers.len(), 2);
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::new("sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(
            config.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_ai_config_trims_trailing_slash() {
        let config = AiConfig::new("k").with_base_url("http://localhost:8080/v1/");
        assert_eq!(
            config.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_ai_config_debug_redacts_key() {
        let config = AiConfig::new("sk-very-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_ai_config_serde_skips_key() {
        let config = AiConfig::new("sk-very-secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-very-secret"));
        assert!(json.contains("gpt-4o-mini"));
    }

    #[test]
    fn test_ai_config_reads_back_without_key() {
        let config = AiConfig::new("sk-very-secret").with_model("gpt-4o");
        let json = serde_json::to_string(&config).unwrap();

        let parsed: AiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api_key, "");
        assert_eq!(parsed.model, "gpt-4o");
        assert_eq!(parsed.timeout_secs, config.timeout_secs);
    }
}
