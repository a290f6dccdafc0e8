//! Inference module - value types and parsing for model-backed results.
//!
//! Nothing here talks to a provider; it defines what the model is asked for,
//! how its answers are read, and the canned text used when it is absent.

pub mod extractor;
mod lenient;
mod results;
pub mod templates;

pub use extractor::{locate_json_span, Extracted, SpanStrategy, StructuredExtractor};
pub use results::{
    BreathingExercise, CoachingPayload, CoachingTip, MoodAnalysis, MoodEntry, MoodPatterns,
    TipKind,
};
