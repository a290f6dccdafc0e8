//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::{GROQ_BASE_URL, GROQ_DEFAULT_MODEL, QWEN_BASE_URL, QWEN_DEFAULT_MODEL};

/// AI provider configuration
///
/// Missing keys are not an error: a provider without a key is simply left
/// out of the fallback order.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Groq API key
    pub groq_api_key: Option<Secret<String>>,

    #[serde(default = "default_groq_model")]
    pub groq_model: String,

    #[serde(default = "default_groq_base_url")]
    pub groq_base_url: String,

    /// Qwen (DashScope) API key
    pub qwen_api_key: Option<Secret<String>>,

    #[serde(default = "default_qwen_model")]
    pub qwen_model: String,

    #[serde(default = "default_qwen_base_url")]
    pub qwen_base_url: String,

    /// Provider tried first; the other one is the fallback
    #[serde(default)]
    pub primary_provider: AiProvider,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Groq,
    Qwen,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if Groq is configured
    pub fn has_groq(&self) -> bool {
        has_key(&self.groq_api_key)
    }

    /// Check if Qwen is configured
    pub fn has_qwen(&self) -> bool {
        has_key(&self.qwen_api_key)
    }

    /// Providers in the order they should be tried.
    pub fn provider_order(&self) -> [AiProvider; 2] {
        match self.primary_provider {
            AiProvider::Groq => [AiProvider::Groq, AiProvider::Qwen],
            AiProvider::Qwen => [AiProvider::Qwen, AiProvider::Groq],
        }
    }

    /// Fills missing keys from the unprefixed `GROQ_API_KEY` / `QWEN_API_KEY`.
    pub fn with_bare_env_keys(mut self) -> Self {
        if !self.has_groq() {
            self.groq_api_key = bare_env_key("GROQ_API_KEY");
        }
        if !self.has_qwen() {
            self.qwen_api_key = bare_env_key("QWEN_API_KEY");
        }
        self
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.groq_model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GROQ_MODEL"));
        }
        if self.qwen_model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("QWEN_MODEL"));
        }
        if !is_http_url(&self.groq_base_url) {
            return Err(ValidationError::InvalidBaseUrl("groq"));
        }
        if !is_http_url(&self.qwen_base_url) {
            return Err(ValidationError::InvalidBaseUrl("qwen"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            groq_model: default_groq_model(),
            groq_base_url: default_groq_base_url(),
            qwen_api_key: None,
            qwen_model: default_qwen_model(),
            qwen_base_url: default_qwen_base_url(),
            primary_provider: AiProvider::default(),
            timeout_secs: default_timeout(),
        }
    }
}

fn has_key(key: &Option<Secret<String>>) -> bool {
    key.as_ref()
        .is_some_and(|k| !k.expose_secret().trim().is_empty())
}

fn bare_env_key(name: &str) -> Option<Secret<String>> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(Secret::new)
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn default_groq_model() -> String {
    GROQ_DEFAULT_MODEL.to_string()
}

fn default_groq_base_url() -> String {
    GROQ_BASE_URL.to_string()
}

fn default_qwen_model() -> String {
    QWEN_DEFAULT_MODEL.to_string()
}

fn default_qwen_base_url() -> String {
    QWEN_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}
