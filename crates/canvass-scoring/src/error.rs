use thiserror::Error;

use canvass_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// Every question has at least one part; an empty level list is a caller
    /// bug, and defaulting here would corrupt downstream analytics.
    #[error("cannot compute an overall level from zero part levels")]
    NoPartLevels,

    #[error("invalid part definition: {0}")]
    Part(#[from] CoreError),
}
