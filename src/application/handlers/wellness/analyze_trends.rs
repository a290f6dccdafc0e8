//! AnalyzeTrendsHandler - Pattern detection over a recent window of moods.

use std::sync::Arc;

use crate::application::companion::WellnessAgent;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::inference::{MoodEntry, MoodPatterns};
use crate::ports::SessionStore;

/// Query for mood patterns over the last `days` days.
///
/// Only emotions logged inside the window reach pattern detection; the
/// window is applied before the history cap. Earlier versions of the service
/// accepted `days` but analysed the whole history.
#[derive(Debug, Clone)]
pub struct AnalyzeTrendsQuery {
    pub user_id: UserId,
    pub days: u32,
}

/// Handler for trend analysis.
pub struct AnalyzeTrendsHandler {
    agent: Arc<WellnessAgent>,
    store: Arc<dyn SessionStore>,
}

impl AnalyzeTrendsHandler {
    pub fn new(agent: Arc<WellnessAgent>, store: Arc<dyn SessionStore>) -> Self {
        Self { agent, store }
    }

    pub async fn handle(&self, query: AnalyzeTrendsQuery) -> Result<MoodPatterns, DomainError> {
        let since = Timestamp::now().minus_days(i64::from(query.days));
        let session = self.store.get_or_create(&query.user_id).await?;
        let recent = session.lock().await.emotions_since(&since);
        let window: Vec<MoodEntry> = recent.iter().map(MoodEntry::from).collect();

        tracing::debug!(
            user_id = %query.user_id,
            days = query.days,
            entries = window.len(),
            "analyzing mood trends"
        );

        Ok(self.agent.detect_patterns(&window).await)
    }
}
