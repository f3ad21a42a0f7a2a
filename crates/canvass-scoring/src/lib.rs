//! canvass-scoring
//!
//! The weighted scoring engine: how a composite question's heterogeneous
//! parts (boolean, labelled-scale, numeric) map onto the question's discrete
//! rating scale. Pure computation over in-memory documents — the engine
//! performs no I/O, holds no state, and assumes its callers hand it a single
//! consistent snapshot.
//!
//! - [`defaults`] seeds an always-valid configuration for a new part.
//! - [`validate`] reports every structural problem in one pass.
//! - [`level`] resolves answers to levels and folds them into one.
//! - [`mutations`] keeps the document keyed by the live part set.

pub mod defaults;
pub mod error;
pub mod level;
pub mod mutations;
pub mod validate;
