//! Inference tuning configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::InferenceLimits;
use crate::domain::inference::{SpanStrategy, StructuredExtractor};

/// Caps, thresholds and randomness for the inference operations
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Most recent mood entries used for pattern detection
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Triggers passed to journal prompt generation
    #[serde(default = "default_trigger_limit")]
    pub trigger_limit: usize,

    #[serde(default = "default_break_threshold")]
    pub break_threshold_minutes: u32,

    #[serde(default = "default_hydration_threshold")]
    pub hydration_threshold_minutes: u32,

    /// Stress above this earns a breathing exercise
    #[serde(default = "default_stress_threshold")]
    pub stress_exercise_threshold: u8,

    /// How JSON objects are cut out of model replies (`greedy` or `balanced`)
    #[serde(default)]
    pub span_strategy: SpanStrategy,

    /// Seed for canned-text selection; random when unset
    pub rng_seed: Option<u64>,
}

impl InferenceConfig {
    pub fn limits(&self) -> InferenceLimits {
        InferenceLimits {
            history_limit: self.history_limit,
            trigger_limit: self.trigger_limit,
            break_threshold_minutes: self.break_threshold_minutes,
            hydration_threshold_minutes: self.hydration_threshold_minutes,
            stress_exercise_threshold: self.stress_exercise_threshold,
        }
    }

    pub fn extractor(&self) -> StructuredExtractor {
        StructuredExtractor::new().with_strategy(self.span_strategy)
    }

    /// Validate inference configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_limit == 0 {
            return Err(ValidationError::InvalidLimit("history_limit"));
        }
        if self.trigger_limit == 0 {
            return Err(ValidationError::InvalidLimit("trigger_limit"));
        }
        if self.stress_exercise_threshold > 10 {
            return Err(ValidationError::InvalidLimit("stress_exercise_threshold"));
        }
        Ok(())
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            trigger_limit: default_trigger_limit(),
            break_threshold_minutes: default_break_threshold(),
            hydration_threshold_minutes: default_hydration_threshold(),
            stress_exercise_threshold: default_stress_threshold(),
            span_strategy: SpanStrategy::default(),
            rng_seed: None,
        }
    }
}

fn default_history_limit() -> usize {
    10
}

fn default_trigger_limit() -> usize {
    5
}

fn default_break_threshold() -> u32 {
    50
}

fn default_hydration_threshold() -> u32 {
    40
}

fn default_stress_threshold() -> u8 {
    5
}
