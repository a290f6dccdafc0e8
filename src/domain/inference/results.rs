//! Typed results produced by the inference layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::lenient;
use crate::domain::foundation::Timestamp;
use crate::domain::wellness::{EmotionRecord, Emotion, Intensity, Sentiment, WeeklyTrend};

/// Emotion classification of a piece of user text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MoodAnalysis {
    #[serde(default, deserialize_with = "lenient::emotion")]
    pub emotion: Emotion,
    #[serde(default, deserialize_with = "lenient::intensity")]
    pub intensity: Intensity,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub triggers: Vec<String>,
    #[serde(default, deserialize_with = "lenient::sentiment")]
    pub sentiment: Sentiment,
}

impl MoodAnalysis {
    /// `{neutral, 5, [], neutral}`, returned whenever classification is unavailable.
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// One point of mood history as fed to pattern detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodEntry {
    pub emotion: Emotion,
    pub intensity: Intensity,
    pub timestamp: Timestamp,
}

impl From<&EmotionRecord> for MoodEntry {
    fn from(record: &EmotionRecord) -> Self {
        Self {
            emotion: record.name(),
            intensity: record.intensity(),
            timestamp: *record.timestamp(),
        }
    }
}

/// Patterns found across a user's recent moods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodPatterns {
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub recurring_emotions: Vec<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub trigger_correlations: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "lenient::weekly_trend")]
    pub weekly_trend: WeeklyTrend,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub recommendations: Vec<String>,
}

impl MoodPatterns {
    pub const RECOMMENDATION_COUNT: usize = 3;

    /// Payload for users with no history, or when no provider is configured.
    pub fn baseline() -> Self {
        Self::stable_with(["Log moods daily", "Try breathing exercises", "Journal before bed"])
    }

    /// Payload used when the provider answered but the answer was unusable.
    pub fn fallback() -> Self {
        Self::stable_with(["Practice gratitude", "Take short walks", "Stay hydrated"])
    }

    fn stable_with(recommendations: [&str; 3]) -> Self {
        Self {
            recurring_emotions: vec![Emotion::Neutral.to_string()],
            trigger_correlations: BTreeMap::new(),
            weekly_trend: WeeklyTrend::Stable,
            recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Forces exactly three recommendations, topping up from `filler`.
    pub fn with_recommendation_count(mut self, filler: &MoodPatterns) -> Self {
        self.recommendations.truncate(Self::RECOMMENDATION_COUNT);
        for tip in &filler.recommendations {
            if self.recommendations.len() >= Self::RECOMMENDATION_COUNT {
                break;
            }
            if !self.recommendations.contains(tip) {
                self.recommendations.push(tip.clone());
            }
        }
        if self.recurring_emotions.is_empty() {
            self.recurring_emotions = filler.recurring_emotions.clone();
        }
        self
    }
}

/// A guided breathing exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreathingExercise {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "lenient::seconds")]
    pub duration_seconds: u32,
    #[serde(default, deserialize_with = "lenient::text")]
    pub benefits: String,
}

impl BreathingExercise {
    /// Four-count box breathing.
    pub fn box_breathing() -> Self {
        Self {
            name: "Box Breathing".to_string(),
            steps: ["Inhale 4s", "Hold 4s", "Exhale 4s", "Hold 4s"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            duration_seconds: 120,
            benefits: "Reduces stress and anxiety".to_string(),
        }
    }

    /// True when the exercise can actually be followed.
    pub fn is_usable(&self) -> bool {
        !self.name.is_empty() && !self.steps.is_empty() && self.duration_seconds > 0
    }
}

/// Category of a coaching tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Rest,
    Morning,
    Energy,
    Break,
    Hydration,
    Coach,
    Encouragement,
}

/// A single card in the coaching panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingTip {
    #[serde(rename = "type")]
    pub kind: TipKind,
    pub icon: String,
    pub title: String,
    pub message: String,
}

impl CoachingTip {
    pub fn new(
        kind: TipKind,
        icon: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            icon: icon.into(),
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Time- and mood-aware coaching answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingPayload {
    pub productivity_tips: Vec<CoachingTip>,
    pub mental_check: String,
    pub time_greeting: String,
    pub productivity_focus: String,
}
