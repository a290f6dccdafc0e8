//! HTTP adapters - REST API implementations.
//!
//! Walkers are exposed as `POST /walker/{Name}` and answer with the
//! `{"result": {}, "reports": [..]}` envelope.

mod router;
pub mod wellness;

pub use router::app_router;
pub use wellness::{wellness_routes, WellnessHandlers};
