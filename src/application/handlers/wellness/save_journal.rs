//! SaveJournalHandler - Stores a journal entry with a model insight.

use std::sync::Arc;

use crate::application::companion::WellnessAgent;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wellness::{Intensity, JournalRecord};
use crate::ports::SessionStore;

/// Characters of the entry quoted back to the model as context.
const CONTEXT_EXCERPT_CHARS: usize = 100;

/// Command to save a journal entry.
#[derive(Debug, Clone)]
pub struct SaveJournalCommand {
    pub user_id: UserId,
    pub content: String,
    pub mood_before: Intensity,
}

/// Result of saving a journal entry.
#[derive(Debug, Clone)]
pub struct SaveJournalResult {
    /// One-based position of the entry in the user's journal.
    pub entry_id: usize,
    pub mood_change: i32,
    pub response: String,
}

/// Handler for journal entries.
pub struct SaveJournalHandler {
    agent: Arc<WellnessAgent>,
    store: Arc<dyn SessionStore>,
}

impl SaveJournalHandler {
    pub fn new(agent: Arc<WellnessAgent>, store: Arc<dyn SessionStore>) -> Self {
        Self { agent, store }
    }

    pub async fn handle(&self, cmd: SaveJournalCommand) -> Result<SaveJournalResult, DomainError> {
        let analysis = self.agent.classify_mood(&cmd.content).await;
        let mood_after = analysis.intensity;

        let excerpt: String = cmd.content.chars().take(CONTEXT_EXCERPT_CHARS).collect();
        let response = self
            .agent
            .empathy_response(
                analysis.emotion,
                mood_after,
                &format!("After journaling: {}", excerpt),
            )
            .await;

        let record = JournalRecord::new(cmd.content, cmd.mood_before, mood_after, response.clone());
        let mood_change = record.mood_change();
        let entry_id = self.store.append_journal(&cmd.user_id, record).await?;

        tracing::debug!(
            user_id = %cmd.user_id,
            entry_id,
            mood_change,
            "journal entry saved"
        );

        Ok(SaveJournalResult {
            entry_id,
            mood_change,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::companion::test_support::{agent_with, offline_agent};

    fn command(content: &str, before: i64) -> SaveJournalCommand {
        SaveJournalCommand {
            user_id: UserId::new("writer").unwrap(),
            content: content.to_string(),
            mood_before: Intensity::new(before).unwrap(),
        }
    }

    #[tokio::test]
    async fn entry_ids_count_up() {
        let handler = SaveJournalHandler::new(
            Arc::new(offline_agent()),
            Arc::new(InMemorySessionStore::new()),
        );

        let first = handler.handle(command("today was fine", 3)).await.unwrap();
        let second = handler.handle(command("tomorrow too", 3)).await.unwrap();

        assert_eq!(first.entry_id, 1);
        assert_eq!(second.entry_id, 2);
    }

    #[tokio::test]
    async fn offline_mood_change_uses_neutral_intensity() {
        let handler = SaveJournalHandler::new(
            Arc::new(offline_agent()),
            Arc::new(InMemorySessionStore::new()),
        );

        let result = handler.handle(command("meh", 3)).await.unwrap();

        assert_eq!(result.mood_change, 2);
        assert!(result.response.contains("neutral"));
    }

    #[tokio::test]
    async fn insight_context_quotes_the_first_hundred_chars() {
        let provider = MockAIProvider::new()
            .with_response(r#"{"emotion": "calm", "intensity": 8}"#)
            .with_response("Writing helped you settle.");
        let handler = SaveJournalHandler::new(
            Arc::new(agent_with(&[&provider])),
            Arc::new(InMemorySessionStore::new()),
        );
        let long_entry = "a".repeat(150);

        let result = handler.handle(command(&long_entry, 4)).await.unwrap();

        assert_eq!(result.mood_change, 4);
        assert_eq!(result.response, "Writing helped you settle.");
        let empathy_prompt = &provider.get_calls()[1].user_prompt;
        assert!(empathy_prompt.contains(&format!("Context: After journaling: {}.", "a".repeat(100))));
    }
}
