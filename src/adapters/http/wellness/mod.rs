//! HTTP adapter for the walker endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, HealthReport, JournalReport, JournalRequest, MindCoachRequest,
    MoodLogRequest, MoodLoggerReport, SuggestionReport, SuggestionRequest, TrendReport,
    TrendRequest, WalkerEnvelope, WalkersResponse, SERVICE_NAME, SERVICE_VERSION, WALKERS,
};
pub use handlers::WellnessHandlers;
pub use routes::wellness_routes;
