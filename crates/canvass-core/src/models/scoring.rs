use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Levels assigned to the two boolean outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct BooleanScoring {
    #[serde(rename = "true")]
    pub when_true: u32,
    #[serde(rename = "false")]
    pub when_false: u32,
}

/// One contiguous slice of a numeric part's domain, mapped to a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub level: u32,
}

/// The scoring rule for exactly one part. The wire shape follows the part's
/// answer type with no enum wrapper: `{"true": n, "false": n}` for boolean,
/// `{"<label>": n, ...}` for labelled scales, `[{"min", "max", "level"}]`
/// for numeric parts. Boolean is matched strictly (exactly its two keys) so
/// a labelled map can never be read as boolean scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum PartScoring {
    Boolean(BooleanScoring),
    Numeric(Vec<NumericRange>),
    Labelled(BTreeMap<String, u32>),
}

/// Version tag of the persisted document. One version exists today; the tag
/// is what lets a future migration tell documents apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConfigVersion {
    Weighted,
}

/// The full per-question scoring document, persisted as a JSON column.
///
/// Once finalized, the key set equals the question's live part ids — no
/// orphan entries, no missing entries. An absent document means "scoring not
/// yet defined", never "level zero everywhere".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeightedScoringConfig {
    pub version: ConfigVersion,
    pub part_scoring: BTreeMap<Uuid, PartScoring>,
}

impl WeightedScoringConfig {
    /// An empty document carrying the current version tag.
    pub fn new() -> Self {
        Self {
            version: ConfigVersion::Weighted,
            part_scoring: BTreeMap::new(),
        }
    }

    /// Parse the persisted JSON column into the typed document. The engine
    /// only ever operates on the typed form; parsing happens here, at the
    /// persistence boundary.
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize back to the persisted JSON shape.
    pub fn to_json(&self) -> Result<serde_json::Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Default for WeightedScoringConfig {
    fn default() -> Self {
        Self::new()
    }
}
