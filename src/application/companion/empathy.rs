//! Supportive free-text replies.

use super::WellnessAgent;
use crate::domain::wellness::{Emotion, Intensity};
use crate::ports::{CompletionPurpose, CompletionRequest, DegradedReason, Generation};

const SYSTEM_PROMPT: &str = "You are a compassionate mental wellness companion.";

impl WellnessAgent {
    /// A warm reply to someone feeling `emotion`, with one coping strategy.
    pub async fn empathy_response(
        &self,
        emotion: Emotion,
        intensity: Intensity,
        context: &str,
    ) -> String {
        let request = CompletionRequest::new(
            CompletionPurpose::Empathy,
            format!(
                "Generate a warm, empathetic response for someone feeling {} at intensity {}/10. \
                 Context: {}. Be supportive and suggest one helpful coping strategy. \
                 Keep response under 100 words.",
                emotion, intensity, context
            ),
        )
        .with_system_prompt(SYSTEM_PROMPT)
        .with_temperature(0.7)
        .with_max_tokens(150);

        match self.generator.generate(request).await {
            Generation::Generated { text, .. } if !text.trim().is_empty() => text,
            Generation::Degraded {
                reason: DegradedReason::NoProviders,
                ..
            } => format!(
                "I understand you're feeling {}. Take a deep breath and remember this moment will pass.",
                emotion
            ),
            _ => format!(
                "I hear you. Feeling {} is valid. Consider taking a few deep breaths.",
                emotion
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::wellness::{Emotion, Intensity};

    fn intensity(value: i64) -> Intensity {
        Intensity::new(value).unwrap()
    }

    #[tokio::test]
    async fn offline_reply_is_templated() {
        let reply = offline_agent()
            .empathy_response(Emotion::Sad, intensity(6), "lost my keys")
            .await;

        assert_eq!(
            reply,
            "I understand you're feeling sad. Take a deep breath and remember this moment will pass."
        );
    }

    #[tokio::test]
    async fn failed_providers_use_the_validation_template() {
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "down".to_string(),
        });

        let reply = agent_with(&[&provider])
            .empathy_response(Emotion::Angry, intensity(8), "traffic")
            .await;

        assert_eq!(
            reply,
            "I hear you. Feeling angry is valid. Consider taking a few deep breaths."
        );
    }

    #[tokio::test]
    async fn provider_text_is_returned_unchanged() {
        let provider = MockAIProvider::new().with_response("That sounds hard. Try a short walk.");

        let reply = agent_with(&[&provider])
            .empathy_response(Emotion::Anxious, intensity(7), "deadline")
            .await;

        assert_eq!(reply, "That sounds hard. Try a short walk.");
    }

    #[tokio::test]
    async fn prompt_carries_emotion_intensity_and_context() {
        let provider = MockAIProvider::new().with_response("ok");

        agent_with(&[&provider])
            .empathy_response(Emotion::Calm, intensity(3), "After journaling: sunny day")
            .await;

        let call = &provider.get_calls()[0];
        assert!(call.user_prompt.contains("feeling calm at intensity 3/10"));
        assert!(call.user_prompt.contains("Context: After journaling: sunny day."));
        assert_eq!(call.temperature, 0.7);
        assert_eq!(call.max_tokens, 150);
    }
}
