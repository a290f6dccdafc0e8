//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - LLM providers and provider fallback
//! - `storage` - Session storage
//! - `http` - axum routes exposing the walker operations

pub mod ai;
pub mod http;
pub mod storage;
