//! Mood-specific mindfulness prompts.

use super::WellnessAgent;
use crate::domain::inference::templates::{self, MoodStrategy};
use crate::domain::wellness::Emotion;
use crate::ports::{CompletionPurpose, CompletionRequest, Generation};

fn system_prompt(mood: &str, strategy: &MoodStrategy) -> String {
    format!(
        "You are a warm, insightful mindfulness guide. Your approach for someone feeling {mood}:\n\n\
         GOAL: {goal}\n\
         APPROACH: {approach}\n\
         TONE: {tone}\n\n\
         Create a unique, heartfelt mindfulness prompt that:\n\
         1. Acknowledges their current emotional state with empathy\n\
         2. Offers a specific, actionable reflection or practice\n\
         3. Feels personal, never generic or repetitive\n\
         4. Is 2-3 sentences, conversational and warm\n\n\
         NEVER use clichés like \"take a deep breath\" or \"this too shall pass\" unless truly fitting.\n\
         Make each prompt feel like it was written just for them.",
        mood = mood,
        goal = strategy.goal,
        approach = strategy.approach,
        tone = strategy.tone,
    )
}

impl WellnessAgent {
    /// A reflective journaling prompt for `current_mood`.
    ///
    /// Unknown moods use the neutral strategy. Without a provider answer one
    /// of the strategy's canned prompts is picked.
    pub async fn generate_prompt(&self, current_mood: &str, recent_triggers: &[String]) -> String {
        let strategy = templates::strategy_for(Emotion::from_name(current_mood));
        let mood = match current_mood.trim() {
            "" => Emotion::Neutral.as_str(),
            mood => mood,
        };

        if !self.has_provider() {
            return self.pick(strategy.example_prompts);
        }

        let triggers: Vec<&str> = recent_triggers
            .iter()
            .map(String::as_str)
            .filter(|t| !t.trim().is_empty())
            .take(self.limits.trigger_limit)
            .collect();
        let triggers_text = if triggers.is_empty() {
            "general life events".to_string()
        } else {
            triggers.join(", ")
        };

        let request = CompletionRequest::new(
            CompletionPurpose::JournalPrompt,
            format!(
                "Create a mindfulness prompt for someone feeling {}, dealing with: {}",
                mood, triggers_text
            ),
        )
        .with_system_prompt(system_prompt(mood, strategy))
        .with_temperature(0.9)
        .with_max_tokens(150);

        match self.generator.generate(request).await {
            Generation::Generated { text, .. } if !text.trim().is_empty() => text,
            _ => self.pick(strategy.example_prompts),
        }
    }
}
