//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Inference runs first with no session lock held; results are appended
//! afterwards so a failed step leaves no partial state.

pub mod companion;
pub mod handlers;

pub use companion::{CoachingContext, InferenceLimits, WellnessAgent};
pub use handlers::{
    AnalyzeTrendsHandler, AnalyzeTrendsQuery, CoachHandler, CoachQuery,
    GenerateSuggestionCommand, GenerateSuggestionHandler, GenerateSuggestionResult,
    LogMoodCommand, LogMoodHandler, LogMoodResult, SaveJournalCommand, SaveJournalHandler,
    SaveJournalResult,
};
