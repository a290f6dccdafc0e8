//! Application handlers.
//!
//! Command and query handlers that run inference and persist the results.

pub mod wellness;

pub use wellness::{
    AnalyzeTrendsHandler, AnalyzeTrendsQuery, CoachHandler, CoachQuery,
    GenerateSuggestionCommand, GenerateSuggestionHandler, GenerateSuggestionResult,
    LogMoodCommand, LogMoodHandler, LogMoodResult, SaveJournalCommand, SaveJournalHandler,
    SaveJournalResult,
};
