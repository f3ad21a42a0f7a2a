use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// The answer kind of a question part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerType {
    /// Yes/no.
    Boolean,
    /// Discrete ordered set of named labels.
    LabelledScale,
    /// Continuous value on a declared scale.
    Scale,
    /// Free numeric value with declared bounds.
    Number,
    /// Numeric value with declared bounds, rendered as a percentage.
    Percentage,
}

impl AnswerType {
    /// The wire name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::LabelledScale => "labelled_scale",
            Self::Scale => "scale",
            Self::Number => "number",
            Self::Percentage => "percentage",
        }
    }

    /// Whether this type carries a continuous numeric domain.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Scale | Self::Number | Self::Percentage)
    }
}

impl std::fmt::Display for AnswerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared bounds for a numeric part. `step` is a UI hint only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericOptions {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

/// Declared label set for a labelled-scale part, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelledOptions {
    pub labels: Vec<String>,
}

/// Type-specific domain declaration. Boolean parts carry no options.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum PartOptions {
    Numeric(NumericOptions),
    Labelled(LabelledOptions),
}

/// A part's declared answer domain, resolved from `answer_type` + `options`.
///
/// The scoring engine pattern-matches on this — never on the raw options —
/// so a new answer kind is a compile-time-enforced change everywhere.
#[derive(Debug, Clone, Copy)]
pub enum AnswerDomain<'a> {
    Boolean,
    Labelled(&'a [String]),
    Numeric { min: f64, max: f64 },
}

/// One sub-question of a composite question. Parts are owned by exactly one
/// question and never shared.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionPart {
    pub id: Uuid,
    pub text: String,
    pub answer_type: AnswerType,
    pub options: Option<PartOptions>,
    pub order_index: i32,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl QuestionPart {
    /// A fresh part with both timestamps set to now.
    pub fn new(
        text: impl Into<String>,
        answer_type: AnswerType,
        options: Option<PartOptions>,
        order_index: i32,
    ) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            answer_type,
            options,
            order_index,
            created_at: now,
            updated_at: now,
        }
    }

    /// Resolve the declared domain, rejecting an options payload that does
    /// not match the declared `answer_type`.
    pub fn domain(&self) -> Result<AnswerDomain<'_>, CoreError> {
        match (self.answer_type, &self.options) {
            (AnswerType::Boolean, None) => Ok(AnswerDomain::Boolean),
            (AnswerType::LabelledScale, Some(PartOptions::Labelled(options))) => {
                Ok(AnswerDomain::Labelled(&options.labels))
            }
            (answer_type, Some(PartOptions::Numeric(options))) if answer_type.is_numeric() => {
                Ok(AnswerDomain::Numeric {
                    min: options.min,
                    max: options.max,
                })
            }
            (answer_type, _) => Err(CoreError::MismatchedOptions {
                part_id: self.id,
                answer_type,
            }),
        }
    }
}
