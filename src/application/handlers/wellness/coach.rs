//! CoachHandler - Mood- and time-aware productivity coaching.

use std::sync::Arc;

use crate::application::companion::{CoachingContext, WellnessAgent};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::inference::CoachingPayload;

/// Query for coaching tips.
#[derive(Debug, Clone)]
pub struct CoachQuery {
    pub user_id: UserId,
    pub context: CoachingContext,
}

/// Handler for coaching. Reads and writes no session state.
pub struct CoachHandler {
    agent: Arc<WellnessAgent>,
}

impl CoachHandler {
    pub fn new(agent: Arc<WellnessAgent>) -> Self {
        Self { agent }
    }

    pub async fn handle(&self, query: CoachQuery) -> Result<CoachingPayload, DomainError> {
        let payload = self.agent.mind_coach(&query.context).await;

        tracing::debug!(
            user_id = %query.user_id,
            tips = payload.productivity_tips.len(),
            "coaching generated"
        );

        Ok(payload)
    }
}
