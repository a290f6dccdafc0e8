//! Domain layer - Core business logic.
//!
//! Contains the wellness aggregates, the inference value types and the
//! shared foundation primitives. No I/O happens here.

pub mod foundation;
pub mod inference;
pub mod wellness;
