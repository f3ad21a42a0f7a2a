//! canvass-core
//!
//! Pure domain types for the Canvass scoring engine. No storage or HTTP
//! dependency — this is the shared vocabulary between the question store,
//! the response pipeline, and the scoring engine.

pub mod error;
pub mod models;
