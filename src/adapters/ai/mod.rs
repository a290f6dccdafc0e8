//! AI Provider Adapters.
//!
//! ## Available Adapters
//!
//! - `ChatCompletionsProvider` - OpenAI-compatible chat completions (Groq, Qwen presets)
//! - `FallbackDispatcher` - Ordered provider fallback implementing `TextGenerator`
//! - `MockAIProvider` - Configurable mock for testing

mod chat_completions_provider;
mod fallback_dispatcher;
mod mock_provider;

pub use chat_completions_provider::{
    ChatCompletionsConfig, ChatCompletionsProvider, GROQ_BASE_URL, GROQ_DEFAULT_MODEL,
    QWEN_BASE_URL, QWEN_DEFAULT_MODEL,
};
pub use fallback_dispatcher::FallbackDispatcher;
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
