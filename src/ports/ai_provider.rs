//! AI Provider Port - Interface for LLM chat-completion providers.
//!
//! A provider performs exactly one request/response exchange per call. It
//! never retries and never falls back; ordering and degradation are the job of
//! the [`TextGenerator`](super::TextGenerator) built on top of providers.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl AIProvider for EchoProvider {
//!     async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
//!         Ok(CompletionResponse::new(request.user_prompt, "echo"))
//!     }
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("echo", "echo-1")
//!     }
//!     fn is_available(&self) -> bool {
//!         true
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for AI/LLM provider interactions.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Performs one completion exchange.
    ///
    /// An unconfigured provider fails with [`AIError::NotConfigured`] without
    /// touching the network.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Provider name and model.
    fn provider_info(&self) -> ProviderInfo;

    /// Whether credentials are present.
    fn is_available(&self) -> bool;
}

/// What a completion is for. Used for tracing only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPurpose {
    MoodClassification,
    Empathy,
    PatternDetection,
    JournalPrompt,
    BreathingExercise,
    Coaching,
}

impl CompletionPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionPurpose::MoodClassification => "mood_classification",
            CompletionPurpose::Empathy => "empathy",
            CompletionPurpose::PatternDetection => "pattern_detection",
            CompletionPurpose::JournalPrompt => "journal_prompt",
            CompletionPurpose::BreathingExercise => "breathing_exercise",
            CompletionPurpose::Coaching => "coaching",
        }
    }
}

/// Request for a single completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt guiding model behavior.
    pub system_prompt: String,
    /// The user turn.
    pub user_prompt: String,
    /// Sampling temperature in `[0, 1]`.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    pub purpose: CompletionPurpose,
    /// Trace ID for correlating log lines.
    pub trace_id: String,
}

impl CompletionRequest {
    /// Creates a request with temperature 0.7 and 150 output tokens.
    pub fn new(purpose: CompletionPurpose, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: String::new(),
            user_prompt: user_prompt.into(),
            temperature: 0.7,
            max_tokens: 150,
            purpose,
            trace_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Sets the temperature, clamped to `[0, 1]`.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = temp.clamp(0.0, 1.0);
        self
    }

    /// Sets the maximum tokens to generate. Zero is raised to one.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max.max(1);
        self
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }
}

/// Response from a completion.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated content.
    pub content: String,
    pub usage: TokenUsage,
    /// Model that generated the response.
    pub model: String,
    pub finish_reason: FinishReason,
}

impl CompletionResponse {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: TokenUsage::default(),
            model: model.into(),
            finish_reason: FinishReason::Stop,
        }
    }
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop (end of response).
    Stop,
    /// Hit max_tokens limit.
    Length,
    /// Content was filtered for safety.
    ContentFilter,
    /// An error occurred.
    Error,
}

/// Provider identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "groq", "qwen").
    pub name: String,
    /// Model identifier (e.g., "llama-3.3-70b-versatile").
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// AI provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AIError {
    /// No credentials configured for this provider.
    #[error("provider not configured: {provider}")]
    NotConfigured {
        /// Provider name.
        provider: String,
    },

    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider returned a server error.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },
}

impl AIError {
    pub fn not_configured(provider: impl Into<String>) -> Self {
        Self::NotConfigured {
            provider: provider.into(),
        }
    }

    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    /// Returns true if a later attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AIError::RateLimited { .. }
                | AIError::Unavailable { .. }
                | AIError::Network(_)
                | AIError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_builder_works() {
        let request = CompletionRequest::new(CompletionPurpose::Empathy, "I feel tired")
            .with_system_prompt("Be kind")
            .with_temperature(0.3)
            .with_max_tokens(200)
            .with_trace_id("trace-1");

        assert_eq!(request.user_prompt, "I feel tired");
        assert_eq!(request.system_prompt, "Be kind");
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.max_tokens, 200);
        assert_eq!(request.trace_id, "trace-1");
        assert_eq!(request.purpose, CompletionPurpose::Empathy);
    }

    #[test]
    fn completion_request_keeps_parameters_in_range() {
        let request = CompletionRequest::new(CompletionPurpose::Coaching, "x")
            .with_temperature(1.7)
            .with_max_tokens(0);

        assert_eq!(request.temperature, 1.0);
        assert_eq!(request.max_tokens, 1);
    }

    #[test]
    fn token_usage_calculates_total() {
        let usage = TokenUsage::new(100, 50);
        assert_eq!(usage.total_tokens, 150);
    }

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage::new(u32::MAX, 1);
        assert_eq!(usage.total_tokens, u32::MAX);
    }

    #[test]
    fn ai_error_retryable_classification() {
        assert!(AIError::rate_limited(30).is_retryable());
        assert!(AIError::unavailable("down").is_retryable());
        assert!(AIError::network("reset").is_retryable());
        assert!(AIError::timeout(10).is_retryable());

        assert!(!AIError::AuthenticationFailed.is_retryable());
        assert!(!AIError::not_configured("groq").is_retryable());
        assert!(!AIError::parse("bad").is_retryable());
    }

    #[test]
    fn ai_error_displays_correctly() {
        assert_eq!(
            AIError::not_configured("qwen").to_string(),
            "provider not configured: qwen"
        );
        assert_eq!(
            AIError::timeout(10).to_string(),
            "request timed out after 10s"
        );
    }

    #[test]
    fn purpose_serializes_snake_case() {
        let json = serde_json::to_string(&CompletionPurpose::MoodClassification).unwrap();
        assert_eq!(json, "\"mood_classification\"");
        assert_eq!(CompletionPurpose::JournalPrompt.as_str(), "journal_prompt");
    }
}
