//! LogMoodHandler - Classifies a mood note, replies, and records the emotion.

use std::sync::Arc;

use crate::application::companion::WellnessAgent;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::inference::MoodAnalysis;
use crate::domain::wellness::EmotionRecord;
use crate::ports::SessionStore;

/// Command to log how the user feels.
#[derive(Debug, Clone)]
pub struct LogMoodCommand {
    pub user_id: UserId,
    pub mood_text: String,
    /// Emoji picked in the UI. Informational only.
    pub emoji: Option<String>,
}

/// Result of logging a mood.
#[derive(Debug, Clone)]
pub struct LogMoodResult {
    pub analysis: MoodAnalysis,
    pub response: String,
    pub record: EmotionRecord,
}

/// Handler for logging moods.
pub struct LogMoodHandler {
    agent: Arc<WellnessAgent>,
    store: Arc<dyn SessionStore>,
}

impl LogMoodHandler {
    pub fn new(agent: Arc<WellnessAgent>, store: Arc<dyn SessionStore>) -> Self {
        Self { agent, store }
    }

    pub async fn handle(&self, cmd: LogMoodCommand) -> Result<LogMoodResult, DomainError> {
        let analysis = self.agent.classify_mood(&cmd.mood_text).await;
        let response = self
            .agent
            .empathy_response(analysis.emotion, analysis.intensity, &cmd.mood_text)
            .await;

        let record = EmotionRecord::new(
            analysis.emotion,
            analysis.intensity,
            cmd.mood_text,
            analysis.triggers.clone(),
        );
        self.store.append_emotion(&cmd.user_id, record.clone()).await?;

        tracing::debug!(
            user_id = %cmd.user_id,
            emotion = %analysis.emotion,
            intensity = analysis.intensity.value(),
            emoji = cmd.emoji.as_deref().unwrap_or(""),
            "mood logged"
        );

        Ok(LogMoodResult {
            analysis,
            response,
            record,
        })
    }
}
