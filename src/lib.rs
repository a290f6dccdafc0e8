//! Serenity - Mental wellness companion backend
//!
//! Logs moods, detects patterns, suggests journal prompts and breathing
//! exercises, and coaches around the working day. Every model-backed step
//! degrades to a deterministic answer when no LLM provider is reachable.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
