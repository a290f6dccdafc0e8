//! Breathing exercises scaled to stress.

use super::WellnessAgent;
use crate::domain::inference::BreathingExercise;
use crate::domain::wellness::Intensity;
use crate::ports::{CompletionPurpose, CompletionRequest};

const SYSTEM_PROMPT: &str = "Create breathing exercises. Respond with ONLY valid JSON.";

impl WellnessAgent {
    /// A breathing exercise for `stress_level`.
    ///
    /// Falls back to box breathing when there is no answer, no JSON, or an
    /// exercise that cannot be followed (no steps or no duration).
    pub async fn create_breathing_exercise(&self, stress_level: Intensity) -> BreathingExercise {
        if !self.has_provider() {
            return BreathingExercise::box_breathing();
        }

        let request = CompletionRequest::new(
            CompletionPurpose::BreathingExercise,
            format!(
                "Create a breathing exercise for stress level {}/10. Return JSON:\n\
                 {{\"name\": \"string\", \"steps\": [\"step1\", \"step2\", \"step3\"], \
                 \"duration_seconds\": number, \"benefits\": \"string\"}}",
                stress_level
            ),
        )
        .with_system_prompt(SYSTEM_PROMPT)
        .with_temperature(0.5)
        .with_max_tokens(200);

        let generation = self.generator.generate(request).await;
        let exercise = self
            .extractor
            .extract(generation.text(), BreathingExercise::box_breathing)
            .into_inner();

        if exercise.is_usable() {
            exercise
        } else {
            tracing::debug!("breathing exercise unusable, using box breathing");
            BreathingExercise::box_breathing()
        }
    }
}
