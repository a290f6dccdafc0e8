//! WellnessAgent - the model-backed inference operations.
//!
//! Every operation is total: it builds a prompt, asks the [`TextGenerator`],
//! and collapses any failure into a deterministic default. Nothing here holds
//! session state; callers persist results.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

use crate::domain::inference::{templates, StructuredExtractor};
use crate::ports::TextGenerator;

/// Tunable caps and thresholds for the inference operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferenceLimits {
    /// Most recent mood entries sent to pattern detection.
    pub history_limit: usize,
    /// Triggers mentioned in a journal prompt request.
    pub trigger_limit: usize,
    /// Minutes without a break before a break tip appears.
    pub break_threshold_minutes: u32,
    /// Minutes without a break before a hydration tip appears.
    pub hydration_threshold_minutes: u32,
    /// Stress above this level earns a breathing exercise.
    pub stress_exercise_threshold: u8,
}

impl Default for InferenceLimits {
    fn default() -> Self {
        Self {
            history_limit: 10,
            trigger_limit: 5,
            break_threshold_minutes: 50,
            hydration_threshold_minutes: 40,
            stress_exercise_threshold: 5,
        }
    }
}

/// Runs the mood, journaling and coaching inferences.
pub struct WellnessAgent {
    pub(super) generator: Arc<dyn TextGenerator>,
    pub(super) extractor: StructuredExtractor,
    pub(super) limits: InferenceLimits,
    rng: Mutex<StdRng>,
}

impl WellnessAgent {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            extractor: StructuredExtractor::new(),
            limits: InferenceLimits::default(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_limits(mut self, limits: InferenceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_extractor(mut self, extractor: StructuredExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Makes canned-text selection reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn limits(&self) -> &InferenceLimits {
        &self.limits
    }

    /// Whether any provider has credentials.
    pub fn has_provider(&self) -> bool {
        self.generator.has_provider()
    }

    /// Picks one phrasing from `options`.
    pub(super) fn pick(&self, options: &[&str]) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        templates::pick(&mut *rng, options).to_string()
    }
}
