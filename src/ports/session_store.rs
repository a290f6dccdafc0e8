//! Session Store Port - Per-user volatile wellness state.
//!
//! Sessions are created lazily on first access and live for the lifetime of
//! the process. Appends to one user's session are serialized; different users
//! never contend beyond the brief lookup of their session handle.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wellness::{EmotionRecord, JournalRecord, SuggestionRecord, UserSession};

/// Handle to one user's session, shared by every request for that user.
pub type SharedSession = Arc<Mutex<UserSession>>;

/// Port for per-user session storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the user's session, creating an empty one on first access.
    ///
    /// Repeated calls for the same user return the same handle.
    async fn get_or_create(&self, user_id: &UserId) -> Result<SharedSession, DomainError>;

    async fn append_emotion(
        &self,
        user_id: &UserId,
        record: EmotionRecord,
    ) -> Result<(), DomainError>;

    async fn append_suggestion(
        &self,
        user_id: &UserId,
        record: SuggestionRecord,
    ) -> Result<(), DomainError>;

    /// Appends a journal entry and returns the new journal length.
    async fn append_journal(
        &self,
        user_id: &UserId,
        record: JournalRecord,
    ) -> Result<usize, DomainError>;

    /// Snapshot of the user's emotion history, oldest first.
    async fn emotion_history(&self, user_id: &UserId) -> Result<Vec<EmotionRecord>, DomainError>;
}
