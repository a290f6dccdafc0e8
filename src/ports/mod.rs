//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - one chat-completion exchange with a single LLM provider
//! - `TextGenerator` - ordered provider fallback that never fails
//! - `SessionStore` - per-user emotion, suggestion and journal history

mod ai_provider;
mod session_store;
mod text_generator;

pub use ai_provider::{
    AIError, AIProvider, CompletionPurpose, CompletionRequest, CompletionResponse, FinishReason,
    ProviderInfo, TokenUsage,
};
pub use session_store::{SessionStore, SharedSession};
pub use text_generator::{DegradedReason, Generation, TextGenerator, DEGRADED_MESSAGE};
