//! Pattern detection over recent mood history.

use super::WellnessAgent;
use crate::domain::inference::{Extracted, MoodEntry, MoodPatterns};
use crate::ports::{CompletionPurpose, CompletionRequest};

const SYSTEM_PROMPT: &str = "You analyze mood patterns. Respond with ONLY valid JSON.";

impl WellnessAgent {
    /// Finds recurring emotions, trigger correlations and a weekly trend.
    ///
    /// Only the most recent `history_limit` entries are sent. The result
    /// always carries exactly three recommendations.
    pub async fn detect_patterns(&self, history: &[MoodEntry]) -> MoodPatterns {
        if history.is_empty() || !self.has_provider() {
            return MoodPatterns::baseline();
        }

        let recent = &history[history.len().saturating_sub(self.limits.history_limit)..];
        let serialized = match serde_json::to_string(recent) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "could not serialize mood history");
                return MoodPatterns::fallback();
            }
        };

        let request = CompletionRequest::new(
            CompletionPurpose::PatternDetection,
            format!(
                "Analyze mood history and return JSON:\n\
                 {{\"recurring_emotions\": [\"list\"], \"trigger_correlations\": {{}}, \
                 \"weekly_trend\": \"improving/declining/stable\", \
                 \"recommendations\": [\"tip1\", \"tip2\", \"tip3\"]}}\n\n\
                 History: {}",
                serialized
            ),
        )
        .with_system_prompt(SYSTEM_PROMPT)
        .with_temperature(0.3)
        .with_max_tokens(300);

        let generation = self.generator.generate(request).await;
        let fallback = MoodPatterns::fallback();
        match self.extractor.extract(generation.text(), MoodPatterns::fallback) {
            Extracted::Parsed(patterns) => patterns.with_recommendation_count(&fallback),
            Extracted::Defaulted(patterns) => patterns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::inference::{MoodEntry, MoodPatterns};
    use crate::domain::wellness::{Emotion, EmotionRecord, Intensity, WeeklyTrend};

    fn history(len: usize) -> Vec<MoodEntry> {
        (0..len)
            .map(|i| {
                let emotion = if i % 2 == 0 { Emotion::Sad } else { Emotion::Calm };
                let record =
                    EmotionRecord::new(emotion, Intensity::clamped(i as i64 + 1), "note", vec![]);
                MoodEntry::from(&record)
            })
            .collect()
    }

    #[tokio::test]
    async fn empty_history_returns_baseline_without_calling() {
        let provider = MockAIProvider::new();

        let patterns = agent_with(&[&provider]).detect_patterns(&[]).await;

        assert_eq!(patterns, MoodPatterns::baseline());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn offline_returns_baseline() {
        let patterns = offline_agent().detect_patterns(&history(3)).await;

        assert_eq!(patterns, MoodPatterns::baseline());
        assert_eq!(patterns.recommendations.len(), 3);
    }

    #[tokio::test]
    async fn provider_failure_returns_fallback() {
        let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);

        let patterns = agent_with(&[&provider]).detect_patterns(&history(2)).await;

        assert_eq!(patterns, MoodPatterns::fallback());
    }

    #[tokio::test]
    async fn unparseable_answer_returns_fallback() {
        let provider = MockAIProvider::new().with_response("Looks stable to me.");

        let patterns = agent_with(&[&provider]).detect_patterns(&history(2)).await;

        assert_eq!(patterns, MoodPatterns::fallback());
    }

    #[tokio::test]
    async fn parsed_answer_is_topped_up_to_three_recommendations() {
        let provider = MockAIProvider::new().with_response(
            r#"{"recurring_emotions": ["sad"], "trigger_correlations": {"work": "sad"},
                "weekly_trend": "improving", "recommendations": ["Sleep earlier"]}"#,
        );

        let patterns = agent_with(&[&provider]).detect_patterns(&history(4)).await;

        assert_eq!(patterns.recurring_emotions, vec!["sad".to_string()]);
        assert_eq!(patterns.weekly_trend, WeeklyTrend::Improving);
        assert_eq!(patterns.trigger_correlations["work"], "sad");
        assert_eq!(
            patterns.recommendations,
            vec!["Sleep earlier", "Practice gratitude", "Take short walks"]
        );
    }

    #[tokio::test]
    async fn surplus_recommendations_are_truncated() {
        let provider = MockAIProvider::new().with_response(
            r#"{"recommendations": ["a", "b", "c", "d", "e"], "weekly_trend": "declining"}"#,
        );

        let patterns = agent_with(&[&provider]).detect_patterns(&history(1)).await;

        assert_eq!(patterns.recommendations, vec!["a", "b", "c"]);
        assert_eq!(patterns.recurring_emotions, vec!["neutral".to_string()]);
    }

    #[tokio::test]
    async fn only_the_most_recent_entries_are_sent() {
        let provider = MockAIProvider::new().with_response("{}");

        agent_with(&[&provider]).detect_patterns(&history(15)).await;

        let prompt = &provider.get_calls()[0].user_prompt;
        let json = prompt.split("History: ").nth(1).unwrap();
        let sent: Vec<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(sent.len(), 10);
        assert_eq!(sent[0]["intensity"], 6);
        assert_eq!(sent[9]["intensity"], 10);
    }
}
