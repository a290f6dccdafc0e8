//! HTTP handlers for the walker endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::application::{
    AnalyzeTrendsHandler, CoachHandler, GenerateSuggestionHandler, LogMoodHandler,
    SaveJournalHandler, WellnessAgent,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::SessionStore;

use super::dto::{
    ErrorResponse, HealthReport, JournalReport, JournalRequest, MindCoachRequest,
    MoodLogRequest, MoodLoggerReport, SuggestionReport, SuggestionRequest, TrendReport,
    TrendRequest, WalkerEnvelope, WalkersResponse, WALKERS,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WellnessHandlers {
    log_mood_handler: Arc<LogMoodHandler>,
    analyze_trends_handler: Arc<AnalyzeTrendsHandler>,
    generate_suggestion_handler: Arc<GenerateSuggestionHandler>,
    save_journal_handler: Arc<SaveJournalHandler>,
    coach_handler: Arc<CoachHandler>,
}

impl WellnessHandlers {
    pub fn new(
        log_mood_handler: Arc<LogMoodHandler>,
        analyze_trends_handler: Arc<AnalyzeTrendsHandler>,
        generate_suggestion_handler: Arc<GenerateSuggestionHandler>,
        save_journal_handler: Arc<SaveJournalHandler>,
        coach_handler: Arc<CoachHandler>,
    ) -> Self {
        Self {
            log_mood_handler,
            analyze_trends_handler,
            generate_suggestion_handler,
            save_journal_handler,
            coach_handler,
        }
    }

    /// Wires every handler to one agent and one store.
    pub fn from_parts(agent: Arc<WellnessAgent>, store: Arc<dyn SessionStore>) -> Self {
        Self::new(
            Arc::new(LogMoodHandler::new(agent.clone(), store.clone())),
            Arc::new(AnalyzeTrendsHandler::new(agent.clone(), store.clone())),
            Arc::new(GenerateSuggestionHandler::new(agent.clone(), store.clone())),
            Arc::new(SaveJournalHandler::new(agent.clone(), store)),
            Arc::new(CoachHandler::new(agent)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> Response {
    (StatusCode::OK, Json(HealthReport::healthy())).into_response()
}

/// GET /walkers
pub async fn list_walkers() -> Response {
    let response = WalkersResponse {
        walkers: WALKERS.to_vec(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /walker/HealthCheck
pub async fn health_check() -> Response {
    walker_ok(HealthReport::healthy())
}

/// POST /walker/MoodLogger - Classify, reply and record a mood note
pub async fn log_mood(
    State(handlers): State<WellnessHandlers>,
    payload: Result<Json<MoodLogRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return handle_rejected_body("MoodLogger", rejection),
    };
    let cmd = match req.into_command() {
        Ok(cmd) => cmd,
        Err(e) => return handle_walker_error("MoodLogger", e),
    };

    match handlers.log_mood_handler.handle(cmd).await {
        Ok(result) => walker_ok(MoodLoggerReport::from(result)),
        Err(e) => handle_walker_error("MoodLogger", e),
    }
}

/// POST /walker/TrendAnalyzer - Detect patterns in recent moods
pub async fn analyze_trends(
    State(handlers): State<WellnessHandlers>,
    payload: Result<Json<TrendRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return handle_rejected_body("TrendAnalyzer", rejection),
    };
    let query = match req.into_query() {
        Ok(query) => query,
        Err(e) => return handle_walker_error("TrendAnalyzer", e),
    };

    match handlers.analyze_trends_handler.handle(query).await {
        Ok(patterns) => walker_ok(TrendReport { patterns }),
        Err(e) => handle_walker_error("TrendAnalyzer", e),
    }
}

/// POST /walker/SuggestionGenerator - Journal prompt plus optional breathing exercise
pub async fn generate_suggestion(
    State(handlers): State<WellnessHandlers>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return handle_rejected_body("SuggestionGenerator", rejection),
    };
    let cmd = match req.into_command() {
        Ok(cmd) => cmd,
        Err(e) => return handle_walker_error("SuggestionGenerator", e),
    };

    match handlers.generate_suggestion_handler.handle(cmd).await {
        Ok(result) => walker_ok(SuggestionReport {
            prompt: result.prompt,
            exercise: result.exercise,
        }),
        Err(e) => handle_walker_error("SuggestionGenerator", e),
    }
}

/// POST /walker/JournalSaver - Store a journal entry with an insight
pub async fn save_journal(
    State(handlers): State<WellnessHandlers>,
    payload: Result<Json<JournalRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return handle_rejected_body("JournalSaver", rejection),
    };
    let cmd = match req.into_command() {
        Ok(cmd) => cmd,
        Err(e) => return handle_walker_error("JournalSaver", e),
    };

    match handlers.save_journal_handler.handle(cmd).await {
        Ok(result) => walker_ok(JournalReport::from(result)),
        Err(e) => handle_walker_error("JournalSaver", e),
    }
}

/// POST /walker/MindCoach - Time and mood aware coaching
pub async fn mind_coach(
    State(handlers): State<WellnessHandlers>,
    payload: Result<Json<MindCoachRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return handle_rejected_body("MindCoach", rejection),
    };
    let query = match req.into_query() {
        Ok(query) => query,
        Err(e) => return handle_walker_error("MindCoach", e),
    };

    match handlers.coach_handler.handle(query).await {
        Ok(payload) => walker_ok(payload),
        Err(e) => handle_walker_error("MindCoach", e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn walker_ok<T: Serialize>(report: T) -> Response {
    (StatusCode::OK, Json(WalkerEnvelope::single(report))).into_response()
}

/// Body extraction failures keep axum's status but use the walker error shape.
fn handle_rejected_body(walker: &str, rejection: JsonRejection) -> Response {
    tracing::debug!(walker, error = %rejection, "rejected request body");
    (
        rejection.status(),
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

fn handle_walker_error(walker: &str, error: DomainError) -> Response {
    match error.code() {
        ErrorCode::ValidationFailed => {
            let details = serde_json::to_value(&error.details).unwrap_or(Value::Null);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(error.message()).with_details(details)),
            )
                .into_response()
        }
        ErrorCode::StorageError | ErrorCode::InternalError => {
            tracing::error!(walker, error = %error, "walker failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(error.message())),
            )
                .into_response()
        }
    }
}
