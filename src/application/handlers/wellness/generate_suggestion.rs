//! GenerateSuggestionHandler - Journal prompt plus an optional breathing exercise.

use std::sync::Arc;

use crate::application::companion::WellnessAgent;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::inference::BreathingExercise;
use crate::domain::wellness::{Intensity, SuggestionRecord};
use crate::ports::SessionStore;

/// Command to suggest a reflection for the user's current state.
#[derive(Debug, Clone)]
pub struct GenerateSuggestionCommand {
    pub user_id: UserId,
    pub current_mood: String,
    pub stress_level: Intensity,
}

/// Result of generating a suggestion.
#[derive(Debug, Clone)]
pub struct GenerateSuggestionResult {
    pub prompt: String,
    /// Present only when stress is above the exercise threshold.
    pub exercise: Option<BreathingExercise>,
}

/// Handler for suggestion generation.
pub struct GenerateSuggestionHandler {
    agent: Arc<WellnessAgent>,
    store: Arc<dyn SessionStore>,
}

impl GenerateSuggestionHandler {
    pub fn new(agent: Arc<WellnessAgent>, store: Arc<dyn SessionStore>) -> Self {
        Self { agent, store }
    }

    pub async fn handle(
        &self,
        cmd: GenerateSuggestionCommand,
    ) -> Result<GenerateSuggestionResult, DomainError> {
        let limits = *self.agent.limits();

        // Triggers from the most recent emotions, newest first.
        let history = self.store.emotion_history(&cmd.user_id).await?;
        let recent_triggers: Vec<String> = history
            .iter()
            .rev()
            .take(limits.trigger_limit)
            .flat_map(|record| record.triggers().iter().cloned())
            .collect();

        let prompt = self
            .agent
            .generate_prompt(&cmd.current_mood, &recent_triggers)
            .await;

        let exercise = if cmd.stress_level.value() > limits.stress_exercise_threshold {
            Some(self.agent.create_breathing_exercise(cmd.stress_level).await)
        } else {
            None
        };

        self.store
            .append_suggestion(&cmd.user_id, SuggestionRecord::journal_prompt(prompt.clone()))
            .await?;

        tracing::debug!(
            user_id = %cmd.user_id,
            stress_level = cmd.stress_level.value(),
            with_exercise = exercise.is_some(),
            "suggestion generated"
        );

        Ok(GenerateSuggestionResult { prompt, exercise })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::companion::test_support::{agent_with, offline_agent};
    use crate::domain::wellness::{Emotion, EmotionRecord, SuggestionKind};

    fn user() -> UserId {
        UserId::new("suggest").unwrap()
    }

    fn command(stress: i64) -> GenerateSuggestionCommand {
        GenerateSuggestionCommand {
            user_id: user(),
            current_mood: "anxious".to_string(),
            stress_level: Intensity::new(stress).unwrap(),
        }
    }

    #[tokio::test]
    async fn high_stress_adds_exercise_and_stores_prompt() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GenerateSuggestionHandler::new(Arc::new(offline_agent()), store.clone());

        let result = handler.handle(command(8)).await.unwrap();

        assert!(!result.prompt.is_empty());
        assert_eq!(
            result.exercise,
            Some(BreathingExercise::box_breathing())
        );

        let session = store.get_or_create(&user()).await.unwrap();
        let session = session.lock().await;
        assert_eq!(session.suggestions().len(), 1);
        assert_eq!(session.suggestions()[0].content(), result.prompt);
        assert_eq!(session.suggestions()[0].kind(), SuggestionKind::JournalPrompt);
    }

    #[tokio::test]
    async fn stress_at_threshold_has_no_exercise() {
        let handler = GenerateSuggestionHandler::new(
            Arc::new(offline_agent()),
            Arc::new(InMemorySessionStore::new()),
        );

        let result = handler.handle(command(5)).await.unwrap();

        assert!(result.exercise.is_none());
    }

    #[tokio::test]
    async fn recent_triggers_reach_the_prompt() {
        let store = Arc::new(InMemorySessionStore::new());
        store
            .append_emotion(
                &user(),
                EmotionRecord::new(
                    Emotion::Anxious,
                    Intensity::new(7).unwrap(),
                    "exam week",
                    vec!["exams".to_string()],
                ),
            )
            .await
            .unwrap();
        let provider = MockAIProvider::new().with_response("Write down one thing you've prepared well.");
        let handler = GenerateSuggestionHandler::new(Arc::new(agent_with(&[&provider])), store);

        let result = handler.handle(command(3)).await.unwrap();

        assert_eq!(result.prompt, "Write down one thing you've prepared well.");
        assert!(provider.get_calls()[0]
            .user_prompt
            .ends_with("dealing with: exams"));
    }
}
