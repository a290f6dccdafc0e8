//! Model-backed inference operations, each in its own file.
//!
//! All operations live on [`WellnessAgent`] and are total: provider and
//! parse failures collapse into deterministic defaults.

mod agent;
mod breathing;
mod classify;
mod coach;
mod empathy;
mod patterns;
mod prompts;

pub use agent::{InferenceLimits, WellnessAgent};
pub use coach::{CoachingContext, TimeOfDay};

#[cfg(test)]
pub(crate) use agent::test_support;
