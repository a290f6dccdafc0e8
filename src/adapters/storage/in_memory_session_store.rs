//! In-Memory Session Store Adapter
//!
//! Keeps every user's session in process memory for the lifetime of the
//! process. The outer map lock is held only long enough to find or insert a
//! session handle; appends then lock that one session.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wellness::{EmotionRecord, JournalRecord, SuggestionRecord, UserSession};
use crate::ports::{SessionStore, SharedSession};

/// In-memory storage for user sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<UserId, SharedSession>>>,
}

impl InMemorySessionStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions created so far
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn session(&self, user_id: &UserId) -> SharedSession {
        if let Some(session) = self.sessions.read().await.get(user_id) {
            return Arc::clone(session);
        }

        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(user_id.clone()).or_insert_with(|| {
            tracing::debug!(user_id = %user_id, "creating session");
            Arc::new(Mutex::new(UserSession::new(user_id.clone())))
        });
        Arc::clone(session)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, user_id: &UserId) -> Result<SharedSession, DomainError> {
        Ok(self.session(user_id).await)
    }

    async fn append_emotion(
        &self,
        user_id: &UserId,
        record: EmotionRecord,
    ) -> Result<(), DomainError> {
        let session = self.session(user_id).await;
        session.lock().await.append_emotion(record);
        Ok(())
    }

    async fn append_suggestion(
        &self,
        user_id: &UserId,
        record: SuggestionRecord,
    ) -> Result<(), DomainError> {
        let session = self.session(user_id).await;
        session.lock().await.append_suggestion(record);
        Ok(())
    }

    async fn append_journal(
        &self,
        user_id: &UserId,
        record: JournalRecord,
    ) -> Result<usize, DomainError> {
        let session = self.session(user_id).await;
        let length = session.lock().await.append_journal(record);
        Ok(length)
    }

    async fn emotion_history(&self, user_id: &UserId) -> Result<Vec<EmotionRecord>, DomainError> {
        let session = self.session(user_id).await;
        let history = session.lock().await.emotions().to_vec();
        Ok(history)
    }
}
