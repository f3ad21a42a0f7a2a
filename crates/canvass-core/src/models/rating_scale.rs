use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One level of a question's overall rating scale. The scale itself — and
/// therefore the maximum level — is owned by the containing questionnaire;
/// the scoring engine only receives its size.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RatingScaleLevel {
    pub level: u32,
    pub name: String,
}
