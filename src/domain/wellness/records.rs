//! Records appended to a user's session.
//!
//! Every record is created once and never mutated afterwards, so fields are
//! private and exposed through accessors only.

use serde::{Deserialize, Serialize};

use super::{Emotion, Intensity};
use crate::domain::foundation::Timestamp;

/// One logged mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionRecord {
    name: Emotion,
    intensity: Intensity,
    timestamp: Timestamp,
    color: String,
    note: String,
    #[serde(default)]
    triggers: Vec<String>,
}

impl EmotionRecord {
    /// Creates a record stamped with the current time; the colour is derived from the emotion.
    pub fn new(
        name: Emotion,
        intensity: Intensity,
        note: impl Into<String>,
        triggers: Vec<String>,
    ) -> Self {
        Self::at(Timestamp::now(), name, intensity, note, triggers)
    }

    /// Creates a record with an explicit timestamp.
    pub fn at(
        timestamp: Timestamp,
        name: Emotion,
        intensity: Intensity,
        note: impl Into<String>,
        triggers: Vec<String>,
    ) -> Self {
        Self {
            name,
            intensity,
            timestamp,
            color: name.color().to_string(),
            note: note.into(),
            triggers,
        }
    }

    pub fn name(&self) -> Emotion {
        self.name
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }
}

/// Kind of suggestion handed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    JournalPrompt,
}

/// A generated suggestion, kept so the user can revisit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    content: String,
    #[serde(rename = "type")]
    kind: SuggestionKind,
    timestamp: Timestamp,
}

impl SuggestionRecord {
    pub fn journal_prompt(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: SuggestionKind::JournalPrompt,
            timestamp: Timestamp::now(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SuggestionKind {
        self.kind
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }
}

/// A saved journal entry with the companion's reflection on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRecord {
    content: String,
    timestamp: Timestamp,
    mood_before: Intensity,
    mood_after: Intensity,
    ai_insight: String,
}

impl JournalRecord {
    pub fn new(
        content: impl Into<String>,
        mood_before: Intensity,
        mood_after: Intensity,
        ai_insight: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            timestamp: Timestamp::now(),
            mood_before,
            mood_after,
            ai_insight: ai_insight.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn mood_before(&self) -> Intensity {
        self.mood_before
    }

    pub fn mood_after(&self) -> Intensity {
        self.mood_after
    }

    /// Signed change from before to after journaling.
    pub fn mood_change(&self) -> i32 {
        self.mood_after.value() as i32 - self.mood_before.value() as i32
    }

    pub fn ai_insight(&self) -> &str {
        &self.ai_insight
    }
}
