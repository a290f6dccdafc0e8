//! Emotion vocabulary shared by classification, storage and coaching.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// The six emotions the companion recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Anxious,
    Calm,
    Angry,
    #[default]
    Neutral,
}

/// Coarse grouping used to pick a coaching tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodCategory {
    Positive,
    Neutral,
    Struggling,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Anxious,
        Emotion::Calm,
        Emotion::Angry,
        Emotion::Neutral,
    ];

    /// Parses a free-form emotion name, falling back to `Neutral` for anything unknown.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "happy" => Emotion::Happy,
            "sad" => Emotion::Sad,
            "anxious" => Emotion::Anxious,
            "calm" => Emotion::Calm,
            "angry" => Emotion::Angry,
            _ => Emotion::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Anxious => "anxious",
            Emotion::Calm => "calm",
            Emotion::Angry => "angry",
            Emotion::Neutral => "neutral",
        }
    }

    /// Display colour used by the mood wheel and graphs.
    pub fn color(&self) -> &'static str {
        match self {
            Emotion::Happy => "#FFD700",
            Emotion::Sad => "#4169E1",
            Emotion::Anxious => "#FF6347",
            Emotion::Calm => "#98FB98",
            Emotion::Angry => "#DC143C",
            Emotion::Neutral => "#808080",
        }
    }

    pub fn category(&self) -> MoodCategory {
        match self {
            Emotion::Happy | Emotion::Calm => MoodCategory::Positive,
            Emotion::Neutral => MoodCategory::Neutral,
            Emotion::Anxious | Emotion::Sad | Emotion::Angry => MoodCategory::Struggling,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall polarity reported alongside a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

/// Direction of mood over the analysed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyTrend {
    Improving,
    Declining,
    #[default]
    Stable,
}

impl WeeklyTrend {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "improving" => WeeklyTrend::Improving,
            "declining" => WeeklyTrend::Declining,
            _ => WeeklyTrend::Stable,
        }
    }
}

/// Mood strength on a 1–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const MIDPOINT: Intensity = Intensity(5);

    /// Creates an intensity, rejecting values outside 1–10.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < Self::MIN as i64 || value > Self::MAX as i64 {
            return Err(ValidationError::out_of_range(
                "intensity",
                Self::MIN as i64,
                Self::MAX as i64,
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Creates an intensity, pulling out-of-range values onto the nearest bound.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl TryFrom<i64> for Intensity {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Intensity> for i64 {
    fn from(value: Intensity) -> Self {
        value.0 as i64
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
