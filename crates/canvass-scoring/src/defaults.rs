//! Default scoring generation for newly created parts.
//!
//! Every generated configuration is structurally valid for the part's
//! declared domain: full coverage, no gaps, no overlaps, levels in range.

use std::collections::BTreeMap;

use canvass_core::error::CoreError;
use canvass_core::models::part::{AnswerDomain, QuestionPart};
use canvass_core::models::scoring::{BooleanScoring, NumericRange, PartScoring};

/// Which boolean outcome maps to the best level.
///
/// `true → max` is a platform policy, not something derived from data. It
/// lives here so a caller can reverse the polarity without forking the
/// generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BooleanPolarity {
    #[default]
    TrueIsBest,
    FalseIsBest,
}

/// Tunable knobs for default generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy {
    pub boolean: BooleanPolarity,
}

/// Generate an always-valid initial scoring rule for `part` under the
/// platform's default policy.
///
/// Returns `Ok(None)` only for answer kinds with no ordinal structure; every
/// kind supported today has a default.
pub fn generate_default(
    part: &QuestionPart,
    max_level: u32,
) -> Result<Option<PartScoring>, CoreError> {
    generate_default_with(part, max_level, DefaultPolicy::default())
}

/// [`generate_default`] with an explicit policy.
pub fn generate_default_with(
    part: &QuestionPart,
    max_level: u32,
    policy: DefaultPolicy,
) -> Result<Option<PartScoring>, CoreError> {
    let scoring = match part.domain()? {
        AnswerDomain::Boolean => {
            let (when_true, when_false) = match policy.boolean {
                BooleanPolarity::TrueIsBest => (max_level, 1),
                BooleanPolarity::FalseIsBest => (1, max_level),
            };
            PartScoring::Boolean(BooleanScoring {
                when_true,
                when_false,
            })
        }
        AnswerDomain::Labelled(labels) => PartScoring::Labelled(spread_labels(labels, max_level)),
        AnswerDomain::Numeric { min, max } => {
            PartScoring::Numeric(split_ranges(min, max, max_level))
        }
    };
    Ok(Some(scoring))
}

/// Distribute ordered labels linearly across `[1, max_level]`: the first
/// label lands on 1, the last on `max_level`, levels never decrease along
/// the declared order. A single label maps to the top level.
fn spread_labels(labels: &[String], max_level: u32) -> BTreeMap<String, u32> {
    let count = labels.len();
    let mut mapping = BTreeMap::new();
    for (index, label) in labels.iter().enumerate() {
        let level = if count == 1 {
            max_level
        } else {
            let fraction = index as f64 / (count - 1) as f64;
            (1.0 + fraction * f64::from(max_level - 1)).round() as u32
        };
        mapping.insert(label.clone(), level);
    }
    mapping
}

/// Split `[min, max]` into `max_level` equal-width contiguous ranges in
/// ascending level order.
///
/// Adjacent bounds are derived from the same `range_size` so rounding can
/// never open a gap between neighbours. A non-final upper bound stops one
/// display unit (0.01) short of the next range's lower bound, so no value
/// ever falls in two ranges; the final upper bound is pinned to the exact
/// domain max rather than rounded.
fn split_ranges(min: f64, max: f64, max_level: u32) -> Vec<NumericRange> {
    let range_size = (max - min) / f64::from(max_level);
    (1..=max_level)
        .map(|level| {
            let lower = min + f64::from(level - 1) * range_size;
            let upper = if level == max_level {
                max
            } else {
                round2(min + f64::from(level) * range_size - 0.01)
            };
            NumericRange {
                min: round2(lower),
                max: upper,
                level,
            }
        })
        .collect()
}

/// Round to 2 decimal places for display cleanliness.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
