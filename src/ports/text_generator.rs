//! Text Generator Port - Provider-agnostic text generation that never fails.
//!
//! Callers describe what they want as a [`CompletionRequest`] and get back a
//! [`Generation`]. Provider ordering, timeouts and failures are hidden behind
//! this port; when nothing can answer, the result is [`Generation::Degraded`].

use async_trait::async_trait;

use super::CompletionRequest;

/// Fixed text returned when no provider produced an answer.
pub const DEGRADED_MESSAGE: &str =
    "I'm having trouble connecting right now. Please try again in a moment.";

/// Why a generation fell back to the degraded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradedReason {
    /// No provider has credentials.
    NoProviders,
    /// Every configured provider was tried and failed.
    AllFailed,
}

/// Outcome of a text generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Generated {
        text: String,
        /// Name of the provider that answered.
        provider: String,
    },
    Degraded {
        message: String,
        reason: DegradedReason,
    },
}

impl Generation {
    pub fn generated(text: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::Generated {
            text: text.into(),
            provider: provider.into(),
        }
    }

    pub fn degraded(reason: DegradedReason) -> Self {
        Self::Degraded {
            message: DEGRADED_MESSAGE.to_string(),
            reason,
        }
    }

    /// The provider text, if a provider answered.
    pub fn text(&self) -> Option<&str> {
        match self {
            Generation::Generated { text, .. } => Some(text),
            Generation::Degraded { .. } => None,
        }
    }

    /// The provider text, or the degraded message.
    pub fn into_text(self) -> String {
        match self {
            Generation::Generated { text, .. } => text,
            Generation::Degraded { message, .. } => message,
        }
    }

    pub fn degraded_reason(&self) -> Option<DegradedReason> {
        match self {
            Generation::Generated { .. } => None,
            Generation::Degraded { reason, .. } => Some(*reason),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Generation::Generated { .. })
    }
}

/// Port for generating text with whatever provider is able to answer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text. Never fails; see [`Generation::Degraded`].
    async fn generate(&self, request: CompletionRequest) -> Generation;

    /// Whether at least one provider has credentials.
    fn has_provider(&self) -> bool;
}
