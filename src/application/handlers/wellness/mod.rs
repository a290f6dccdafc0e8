//! Wellness command and query handlers.

mod analyze_trends;
mod coach;
mod generate_suggestion;
mod log_mood;
mod save_journal;

pub use analyze_trends::{AnalyzeTrendsHandler, AnalyzeTrendsQuery};
pub use coach::{CoachHandler, CoachQuery};
pub use generate_suggestion::{
    GenerateSuggestionCommand, GenerateSuggestionHandler, GenerateSuggestionResult,
};
pub use log_mood::{LogMoodCommand, LogMoodHandler, LogMoodResult};
pub use save_journal::{SaveJournalCommand, SaveJournalHandler, SaveJournalResult};
