//! Emotion classification of free text.

use super::WellnessAgent;
use crate::domain::inference::MoodAnalysis;
use crate::ports::{CompletionPurpose, CompletionRequest};

const SYSTEM_PROMPT: &str = "You analyze emotions. Respond with ONLY valid JSON.";

impl WellnessAgent {
    /// Classifies `text` into emotion, intensity, triggers and sentiment.
    ///
    /// Returns [`MoodAnalysis::neutral`] when no provider answers or the
    /// answer holds no JSON object.
    pub async fn classify_mood(&self, text: &str) -> MoodAnalysis {
        let request = CompletionRequest::new(
            CompletionPurpose::MoodClassification,
            format!(
                "Analyze this text and return JSON:\n\
                 {{\"emotion\": \"happy/sad/anxious/calm/angry/neutral\", \"intensity\": 1-10, \
                 \"triggers\": [\"list\"], \"sentiment\": \"positive/negative/neutral\"}}\n\n\
                 Text: {}",
                text
            ),
        )
        .with_system_prompt(SYSTEM_PROMPT)
        .with_temperature(0.3)
        .with_max_tokens(200);

        let generation = self.generator.generate(request).await;
        let extracted = self.extractor.extract(generation.text(), MoodAnalysis::neutral);
        if generation.is_generated() && !extracted.is_parsed() {
            tracing::debug!("classification reply had no usable JSON, treating as neutral");
        }
        extracted.into_inner()
    }
}
