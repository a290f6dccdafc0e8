//! Fallback Dispatcher - Ordered provider fallback behind the TextGenerator port.
//!
//! Every call walks the provider list from the start: providers without
//! credentials are skipped, each remaining provider gets one attempt bounded
//! by a timeout, and the first success wins. There is no sticky state between
//! calls, so a recovered primary is used again immediately.
//!
//! # Example
//!
//! ```ignore
//! let dispatcher = FallbackDispatcher::new(vec![Arc::new(groq), Arc::new(qwen)])
//!     .with_timeout(Duration::from_secs(10));
//!
//! let text = dispatcher.generate(request).await.into_text();
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, DegradedReason, Generation, TextGenerator,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Tries providers in order until one answers.
pub struct FallbackDispatcher {
    providers: Vec<Arc<dyn AIProvider>>,
    timeout: Duration,
}

impl FallbackDispatcher {
    /// Creates a dispatcher over `providers`, primary first.
    pub fn new(providers: Vec<Arc<dyn AIProvider>>) -> Self {
        Self {
            providers,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-provider call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Names of the providers that have credentials, in order.
    pub fn available_providers(&self) -> Vec<String> {
        self.providers
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.provider_info().name)
            .collect()
    }

    async fn attempt(
        &self,
        provider: &dyn AIProvider,
        request: CompletionRequest,
    ) -> Result<String, AIError> {
        match tokio::time::timeout(self.timeout, provider.complete(request)).await {
            Ok(result) => result.map(|response| response.content),
            Err(_) => Err(AIError::timeout(self.timeout.as_secs())),
        }
    }
}

#[async_trait]
impl TextGenerator for FallbackDispatcher {
    async fn generate(&self, request: CompletionRequest) -> Generation {
        let mut attempted = false;

        for provider in self.providers.iter().filter(|p| p.is_available()) {
            attempted = true;
            let info = provider.provider_info();

            match self.attempt(provider.as_ref(), request.clone()).await {
                Ok(text) => {
                    tracing::debug!(
                        provider = %info.name,
                        purpose = request.purpose.as_str(),
                        trace_id = %request.trace_id,
                        "provider answered"
                    );
                    return Generation::generated(text, info.name);
                }
                Err(err) if err.is_retryable() => {
                    tracing::warn!(
                        provider = %info.name,
                        model = %info.model,
                        purpose = request.purpose.as_str(),
                        trace_id = %request.trace_id,
                        error = %err,
                        "provider failed, trying next"
                    );
                }
                // Permanent failures: credentials, configuration, parsing.
                Err(err) => {
                    tracing::error!(
                        provider = %info.name,
                        model = %info.model,
                        purpose = request.purpose.as_str(),
                        trace_id = %request.trace_id,
                        error = %err,
                        "provider rejected the call, trying next"
                    );
                }
            }
        }

        let reason = if attempted {
            DegradedReason::AllFailed
        } else {
            DegradedReason::NoProviders
        };
        tracing::warn!(
            purpose = request.purpose.as_str(),
            trace_id = %request.trace_id,
            reason = ?reason,
            "no provider produced a response"
        );
        Generation::degraded(reason)
    }

    fn has_provider(&self) -> bool {
        self.providers.iter().any(|p| p.is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::ports::{CompletionPurpose, DEGRADED_MESSAGE};

    fn test_request() -> CompletionRequest {
        CompletionRequest::new(CompletionPurpose::Empathy, "Hello")
    }

    fn dispatcher(providers: &[&MockAIProvider]) -> FallbackDispatcher {
        FallbackDispatcher::new(
            providers
                .iter()
                .map(|p| Arc::new((*p).clone()) as Arc<dyn AIProvider>)
                .collect(),
        )
    }

    #[tokio::test]
    async fn primary_success_skips_fallback() {
        let primary = MockAIProvider::new().named("groq").with_response("from groq");
        let fallback = MockAIProvider::new().named("qwen").with_response("from qwen");

        let generation = dispatcher(&[&primary, &fallback]).generate(test_request()).await;

        assert_eq!(generation, Generation::generated("from groq", "groq"));
        assert_eq!(fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn primary_failure_uses_fallback() {
        let primary = MockAIProvider::new()
            .named("groq")
            .with_error(MockError::Unavailable {
                message: "down".to_string(),
            });
        let fallback = MockAIProvider::new().named("qwen").with_response("from qwen");

        let generation = dispatcher(&[&primary, &fallback]).generate(test_request()).await;

        assert_eq!(generation, Generation::generated("from qwen", "qwen"));
        assert_eq!(primary.call_count(), 1);
        assert_eq!(fallback.call_count(), 1);
    }

    #[tokio::test]
    async fn non_retryable_failure_still_falls_back() {
        let primary = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
        let fallback = MockAIProvider::new().named("qwen").with_response("ok");

        let generation = dispatcher(&[&primary, &fallback]).generate(test_request()).await;

        assert_eq!(generation.text(), Some("ok"));
    }

    #[tokio::test]
    async fn unconfigured_primary_is_skipped() {
        let primary = MockAIProvider::unconfigured().named("groq");
        let fallback = MockAIProvider::new().named("qwen").with_response("from qwen");

        let generation = dispatcher(&[&primary, &fallback]).generate(test_request()).await;

        assert_eq!(generation.text(), Some("from qwen"));
        assert_eq!(primary.call_count(), 0);
    }

    #[tokio::test]
    async fn no_configured_providers_degrades_without_calls() {
        let primary = MockAIProvider::unconfigured();
        let fallback = MockAIProvider::unconfigured();
        let dispatcher = dispatcher(&[&primary, &fallback]);

        let generation = dispatcher.generate(test_request()).await;

        assert!(!dispatcher.has_provider());
        assert_eq!(generation.degraded_reason(), Some(DegradedReason::NoProviders));
        assert_eq!(generation.into_text(), DEGRADED_MESSAGE);
        assert_eq!(primary.call_count() + fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn all_failures_degrade() {
        let primary = MockAIProvider::new().with_error(MockError::Network {
            message: "reset".to_string(),
        });
        let fallback = MockAIProvider::new().with_error(MockError::RateLimited {
            retry_after_secs: 5,
        });

        let generation = dispatcher(&[&primary, &fallback]).generate(test_request()).await;

        assert_eq!(generation.degraded_reason(), Some(DegradedReason::AllFailed));
        assert_eq!(generation.into_text(), DEGRADED_MESSAGE);
    }

    #[tokio::test]
    async fn slow_provider_counts_as_failure() {
        let primary = MockAIProvider::new()
            .with_delay(Duration::from_millis(200))
            .with_response("too late");
        let fallback = MockAIProvider::new().named("qwen").with_response("in time");

        let generation = dispatcher(&[&primary, &fallback])
            .with_timeout(Duration::from_millis(20))
            .generate(test_request())
            .await;

        assert_eq!(generation.text(), Some("in time"));
    }

    #[tokio::test]
    async fn every_call_starts_from_the_primary() {
        let primary = MockAIProvider::new()
            .named("groq")
            .with_error(MockError::Unavailable {
                message: "blip".to_string(),
            })
            .with_response("recovered");
        let fallback = MockAIProvider::new().named("qwen").with_response("from qwen");
        let dispatcher = dispatcher(&[&primary, &fallback]);

        let first = dispatcher.generate(test_request()).await;
        let second = dispatcher.generate(test_request()).await;

        assert_eq!(first.text(), Some("from qwen"));
        assert_eq!(second, Generation::generated("recovered", "groq"));
    }

    #[test]
    fn lists_available_providers_in_order() {
        let primary = MockAIProvider::unconfigured().named("groq");
        let fallback = MockAIProvider::new().named("qwen");

        assert_eq!(
            dispatcher(&[&primary, &fallback]).available_providers(),
            vec!["qwen".to_string()]
        );
    }
}
