//! HTTP DTOs for the walker endpoints.
//!
//! Request bodies are lenient: every field has a default so a partial body
//! is accepted, and range checks happen when converting into commands.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::{
    AnalyzeTrendsQuery, CoachQuery, CoachingContext, GenerateSuggestionCommand, LogMoodCommand,
    LogMoodResult, SaveJournalCommand, SaveJournalResult,
};
use crate::domain::foundation::{DomainError, UserId, ValidationError};
use crate::domain::inference::{BreathingExercise, MoodAnalysis, MoodPatterns};
use crate::domain::wellness::Intensity;

pub const SERVICE_NAME: &str = "SerenityAI Backend";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Walker names, in the order `/walkers` lists them.
pub const WALKERS: [&str; 6] = [
    "HealthCheck",
    "MoodLogger",
    "TrendAnalyzer",
    "SuggestionGenerator",
    "JournalSaver",
    "MindCoach",
];

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MoodLogRequest {
    pub user_id: String,
    pub mood_text: String,
    pub emoji: String,
}

impl MoodLogRequest {
    pub fn into_command(self) -> Result<LogMoodCommand, DomainError> {
        Ok(LogMoodCommand {
            user_id: UserId::new(self.user_id)?,
            mood_text: self.mood_text,
            emoji: Some(self.emoji).filter(|e| !e.is_empty()),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrendRequest {
    pub user_id: String,
    pub days: i64,
}

impl Default for TrendRequest {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            days: 7,
        }
    }
}

impl TrendRequest {
    pub fn into_query(self) -> Result<AnalyzeTrendsQuery, DomainError> {
        let user_id = UserId::new(self.user_id)?;
        if self.days < 1 {
            return Err(ValidationError::out_of_range("days", 1, u32::MAX as i64, self.days).into());
        }
        Ok(AnalyzeTrendsQuery {
            user_id,
            days: u32::try_from(self.days).unwrap_or(u32::MAX),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuggestionRequest {
    pub user_id: String,
    pub current_mood: String,
    pub stress_level: i64,
}

impl Default for SuggestionRequest {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            current_mood: "neutral".to_string(),
            stress_level: 5,
        }
    }
}

impl SuggestionRequest {
    pub fn into_command(self) -> Result<GenerateSuggestionCommand, DomainError> {
        Ok(GenerateSuggestionCommand {
            user_id: UserId::new(self.user_id)?,
            current_mood: self.current_mood,
            stress_level: scale("stress_level", self.stress_level)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JournalRequest {
    pub user_id: String,
    pub content: String,
    pub mood_before: i64,
}

impl Default for JournalRequest {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            content: String::new(),
            mood_before: 5,
        }
    }
}

impl JournalRequest {
    pub fn into_command(self) -> Result<SaveJournalCommand, DomainError> {
        Ok(SaveJournalCommand {
            user_id: UserId::new(self.user_id)?,
            content: self.content,
            mood_before: scale("mood_before", self.mood_before)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MindCoachRequest {
    pub user_id: String,
    pub current_mood: String,
    pub current_hour: i64,
    pub last_break_minutes: i64,
    pub is_working: bool,
}

impl Default for MindCoachRequest {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            current_mood: "neutral".to_string(),
            current_hour: 12,
            last_break_minutes: 60,
            is_working: true,
        }
    }
}

impl MindCoachRequest {
    pub fn into_query(self) -> Result<CoachQuery, DomainError> {
        let user_id = UserId::new(self.user_id)?;
        if !(0..=23).contains(&self.current_hour) {
            return Err(
                ValidationError::out_of_range("current_hour", 0, 23, self.current_hour).into(),
            );
        }
        let last_break = u32::try_from(self.last_break_minutes.max(0)).unwrap_or(u32::MAX);

        Ok(CoachQuery {
            user_id,
            context: CoachingContext::new(
                self.current_mood,
                self.current_hour as u8,
                last_break,
                self.is_working,
            ),
        })
    }
}

fn scale(field: &str, value: i64) -> Result<Intensity, DomainError> {
    Intensity::new(value).map_err(|_| {
        ValidationError::out_of_range(field, Intensity::MIN as i64, Intensity::MAX as i64, value)
            .into()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// `{"result": {}, "reports": [payload]}`
#[derive(Debug, Clone, Serialize)]
pub struct WalkerEnvelope<T> {
    pub result: Map<String, Value>,
    pub reports: Vec<T>,
}

impl<T: Serialize> WalkerEnvelope<T> {
    pub fn single(report: T) -> Self {
        Self {
            result: Map::new(),
            reports: vec![report],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthReport {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
            version: SERVICE_VERSION,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WalkersResponse {
    pub walkers: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmotionSummary {
    pub name: String,
    pub intensity: Intensity,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodLoggerReport {
    pub analysis: MoodAnalysis,
    pub response: String,
    pub emotion: EmotionSummary,
}

impl From<LogMoodResult> for MoodLoggerReport {
    fn from(result: LogMoodResult) -> Self {
        let emotion = EmotionSummary {
            name: result.record.name().to_string(),
            intensity: result.record.intensity(),
            color: result.record.color().to_string(),
        };
        Self {
            analysis: result.analysis,
            response: result.response,
            emotion,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub patterns: MoodPatterns,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionReport {
    pub prompt: String,
    pub exercise: Option<BreathingExercise>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JournalReport {
    pub entry_id: String,
    pub mood_change: i32,
    pub response: String,
}

impl From<SaveJournalResult> for JournalReport {
    fn from(result: SaveJournalResult) -> Self {
        Self {
            entry_id: result.entry_id.to_string(),
            mood_change: result.mood_change,
            response: result.response,
        }
    }
}

/// Error body for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}
