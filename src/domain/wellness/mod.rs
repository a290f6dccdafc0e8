//! Wellness module - moods, journal entries and the per-user session.

mod emotion;
mod records;
mod session;

pub use emotion::{Emotion, Intensity, MoodCategory, Sentiment, WeeklyTrend};
pub use records::{EmotionRecord, JournalRecord, SuggestionKind, SuggestionRecord};
pub use session::UserSession;
