//! HTTP routes for the walker endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze_trends, generate_suggestion, health, health_check, list_walkers, log_mood,
    mind_coach, save_journal, WellnessHandlers,
};

/// Creates the walker router with all endpoints.
pub fn wellness_routes(handlers: WellnessHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/walkers", get(list_walkers))
        .route("/walker/HealthCheck", post(health_check))
        .route("/walker/MoodLogger", post(log_mood))
        .route("/walker/TrendAnalyzer", post(analyze_trends))
        .route("/walker/SuggestionGenerator", post(generate_suggestion))
        .route("/walker/JournalSaver", post(save_journal))
        .route("/walker/MindCoach", post(mind_coach))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{FallbackDispatcher, MockAIProvider};
    use crate::application::WellnessAgent;
    use crate::domain::foundation::{DomainError, ErrorCode, UserId};
    use crate::domain::wellness::{EmotionRecord, JournalRecord, SuggestionRecord};
    use crate::ports::{AIProvider, SessionStore, SharedSession};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Store that always fails
    // ───────────────────────────────────────────────────────────────

    struct BrokenStore;

    fn broken() -> DomainError {
        DomainError::new(ErrorCode::StorageError, "store offline")
    }

    #[async_trait]
    impl SessionStore for BrokenStore {
        async fn get_or_create(&self, _user_id: &UserId) -> Result<SharedSession, DomainError> {
            Err(broken())
        }

        async fn append_emotion(
            &self,
            _user_id: &UserId,
            _record: EmotionRecord,
        ) -> Result<(), DomainError> {
            Err(broken())
        }

        async fn append_suggestion(
            &self,
            _user_id: &UserId,
            _record: SuggestionRecord,
        ) -> Result<(), DomainError> {
            Err(broken())
        }

        async fn append_journal(
            &self,
            _user_id: &UserId,
            _record: JournalRecord,
        ) -> Result<usize, DomainError> {
            Err(broken())
        }

        async fn emotion_history(&self, _user_id: &UserId) -> Result<Vec<EmotionRecord>, DomainError> {
            Err(broken())
        }
    }

    fn router_with_broken_store() -> Router {
        let providers: Vec<Arc<dyn AIProvider>> = vec![Arc::new(MockAIProvider::unconfigured())];
        let agent = WellnessAgent::new(Arc::new(FallbackDispatcher::new(providers)));
        wellness_routes(WellnessHandlers::from_parts(Arc::new(agent), Arc::new(BrokenStore)))
    }

    #[tokio::test]
    async fn store_failure_returns_500() {
        let request = Request::builder()
            .method("POST")
            .uri("/walker/MoodLogger")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"user_id": "u1", "mood_text": "ok"}"#))
            .unwrap();

        let response = router_with_broken_store().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn coaching_does_not_touch_the_store() {
        let request = Request::builder()
            .method("POST")
            .uri("/walker/MindCoach")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"user_id": "u1"}"#))
            .unwrap();

        let response = router_with_broken_store().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_walker_is_not_found() {
        let request = Request::builder()
            .method("POST")
            .uri("/walker/Nope")
            .body(Body::empty())
            .unwrap();

        let response = router_with_broken_store().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn walkers_only_accept_post() {
        let request = Request::builder()
            .uri("/walker/MoodLogger")
            .body(Body::empty())
            .unwrap();

        let response = router_with_broken_store().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
