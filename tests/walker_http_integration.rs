//! Integration tests for the walker HTTP endpoints.
//!
//! These tests drive the full router (DTOs, handlers, agent, store) with
//! `tower::ServiceExt::oneshot`, either with no provider configured or with
//! a scripted mock provider.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use serenity_backend::adapters::ai::{FallbackDispatcher, MockAIProvider};
use serenity_backend::adapters::http::{app_router, WellnessHandlers};
use serenity_backend::adapters::storage::InMemorySessionStore;
use serenity_backend::application::WellnessAgent;
use serenity_backend::config::ServerConfig;
use serenity_backend::domain::foundation::UserId;
use serenity_backend::ports::{AIProvider, SessionStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with(providers: Vec<Arc<dyn AIProvider>>) -> (Router, Arc<InMemorySessionStore>) {
    let store = Arc::new(InMemorySessionStore::new());
    let agent = WellnessAgent::new(Arc::new(FallbackDispatcher::new(providers))).with_seed(7);
    let handlers = WellnessHandlers::from_parts(Arc::new(agent), store.clone());
    (app_router(handlers, &ServerConfig::default()), store)
}

fn offline_app() -> (Router, Arc<InMemorySessionStore>) {
    app_with(Vec::new())
}

async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

// =============================================================================
// Health and discovery
// =============================================================================

#[tokio::test]
async fn health_reports_service_identity() {
    let (app, _) = offline_app();

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "SerenityAI Backend");
}

#[tokio::test]
async fn health_check_walker_uses_envelope() {
    let (app, _) = offline_app();

    let request = Request::builder()
        .method("POST")
        .uri("/walker/HealthCheck")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!({}));
    assert_eq!(body["reports"][0]["status"], "healthy");
}

#[tokio::test]
async fn walkers_lists_all_six() {
    let (app, _) = offline_app();

    let (_, body) = get(&app, "/walkers").await;

    assert_eq!(
        body["walkers"],
        json!([
            "HealthCheck",
            "MoodLogger",
            "TrendAnalyzer",
            "SuggestionGenerator",
            "JournalSaver",
            "MindCoach"
        ])
    );
}

// =============================================================================
// MoodLogger
// =============================================================================

#[tokio::test]
async fn mood_logger_without_provider_records_neutral_emotion() {
    let (app, store) = offline_app();

    let (status, body) = post(
        &app,
        "/walker/MoodLogger",
        json!({"user_id": "u1", "mood_text": "I feel great today", "emoji": "😊"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let report = &body["reports"][0];
    assert_eq!(report["analysis"]["emotion"], "neutral");
    assert_eq!(report["analysis"]["intensity"], 5);
    assert_eq!(report["emotion"]["name"], "neutral");
    assert_eq!(report["emotion"]["intensity"], 5);
    assert_eq!(report["emotion"]["color"], "#808080");
    assert!(!report["response"].as_str().unwrap().is_empty());

    let history = store.emotion_history(&user("u1")).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].note(), "I feel great today");
}

#[tokio::test]
async fn mood_logger_uses_provider_classification() {
    let provider = MockAIProvider::new()
        .with_response(
            r#"Sure! {"emotion": "happy", "intensity": 8, "triggers": ["sunshine"], "sentiment": "positive"}"#,
        )
        .with_response("That's wonderful to hear!");
    let providers: Vec<Arc<dyn AIProvider>> = vec![Arc::new(provider)];
    let (app, store) = app_with(providers);

    let (status, body) = post(
        &app,
        "/walker/MoodLogger",
        json!({"user_id": "u2", "mood_text": "sunny walk"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let report = &body["reports"][0];
    assert_eq!(report["emotion"]["name"], "happy");
    assert_eq!(report["emotion"]["color"], "#FFD700");
    assert_eq!(report["analysis"]["triggers"], json!(["sunshine"]));
    assert_eq!(report["response"], "That's wonderful to hear!");

    let history = store.emotion_history(&user("u2")).await.unwrap();
    assert_eq!(history[0].triggers(), ["sunshine".to_string()]);
}

#[tokio::test]
async fn mood_logger_rejects_missing_user() {
    let (app, store) = offline_app();

    let (status, body) = post(&app, "/walker/MoodLogger", json!({"mood_text": "hi"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["details"]["field"], "user_id");
    assert_eq!(store.session_count().await, 0);
}

// =============================================================================
// Other walkers
// =============================================================================

#[tokio::test]
async fn trend_analyzer_returns_baseline_for_new_user() {
    let (app, _) = offline_app();

    let (status, body) = post(&app, "/walker/TrendAnalyzer", json!({"user_id": "u3"})).await;

    assert_eq!(status, StatusCode::OK);
    let patterns = &body["reports"][0]["patterns"];
    assert_eq!(patterns["weekly_trend"], "stable");
    assert_eq!(patterns["recommendations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn trend_analyzer_rejects_zero_days() {
    let (app, _) = offline_app();

    let (status, body) = post(
        &app,
        "/walker/TrendAnalyzer",
        json!({"user_id": "u3", "days": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "days");
}

#[tokio::test]
async fn trend_analyzer_accepts_very_large_window() {
    let (app, _) = offline_app();

    let (status, body) = post(
        &app,
        "/walker/TrendAnalyzer",
        json!({"user_id": "u3", "days": 1_000_000_000i64}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reports"][0]["patterns"]["weekly_trend"], "stable");
}

#[tokio::test]
async fn malformed_json_body_uses_error_shape() {
    let (app, _) = offline_app();

    let request = Request::builder()
        .method("POST")
        .uri("/walker/MoodLogger")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"user_id": "u1", "mood_text": "#))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn missing_content_type_uses_error_shape() {
    let (app, _) = offline_app();

    let request = Request::builder()
        .method("POST")
        .uri("/walker/TrendAnalyzer")
        .body(Body::from(r#"{"user_id": "u1"}"#))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn suggestion_generator_attaches_exercise_only_when_stressed() {
    let (app, _) = offline_app();

    let (_, calm) = post(
        &app,
        "/walker/SuggestionGenerator",
        json!({"user_id": "u4", "current_mood": "calm", "stress_level": 5}),
    )
    .await;
    let (_, stressed) = post(
        &app,
        "/walker/SuggestionGenerator",
        json!({"user_id": "u4", "current_mood": "anxious", "stress_level": 9}),
    )
    .await;

    assert!(!calm["reports"][0]["prompt"].as_str().unwrap().is_empty());
    assert_eq!(calm["reports"][0]["exercise"], Value::Null);
    assert_eq!(stressed["reports"][0]["exercise"]["name"], "Box Breathing");
}

#[tokio::test]
async fn suggestion_generator_rejects_out_of_range_stress() {
    let (app, _) = offline_app();

    let (status, body) = post(
        &app,
        "/walker/SuggestionGenerator",
        json!({"user_id": "u4", "stress_level": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "stress_level");
}

#[tokio::test]
async fn journal_saver_numbers_entries_per_user() {
    let (app, _) = offline_app();
    let entry = json!({"user_id": "u5", "content": "Wrote it all down", "mood_before": 3});

    let (_, first) = post(&app, "/walker/JournalSaver", entry.clone()).await;
    let (_, second) = post(&app, "/walker/JournalSaver", entry).await;

    assert_eq!(first["reports"][0]["entry_id"], "1");
    assert_eq!(second["reports"][0]["entry_id"], "2");
    // offline classification yields intensity 5
    assert_eq!(first["reports"][0]["mood_change"], 2);
}

#[tokio::test]
async fn mind_coach_returns_tips_for_the_hour() {
    let (app, _) = offline_app();

    let (status, body) = post(
        &app,
        "/walker/MindCoach",
        json!({"user_id": "u6", "current_mood": "neutral", "current_hour": 9, "last_break_minutes": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let report = &body["reports"][0];
    assert!(!report["time_greeting"].as_str().unwrap().is_empty());
    assert!(!report["productivity_tips"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn mind_coach_rejects_invalid_hour() {
    let (app, _) = offline_app();

    let (status, body) = post(
        &app,
        "/walker/MindCoach",
        json!({"user_id": "u6", "current_hour": 24}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "current_hour");
}
