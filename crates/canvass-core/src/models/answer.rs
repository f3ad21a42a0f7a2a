use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A respondent's concrete answer to a single question part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Boolean(bool),
    Number(f64),
    Label(String),
}
