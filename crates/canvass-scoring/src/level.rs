//! Resolving answers to rating-scale levels.

use tracing::warn;

use canvass_core::models::answer::AnswerValue;
use canvass_core::models::part::QuestionPart;
use canvass_core::models::scoring::PartScoring;

use crate::error::ScoringError;

/// Resolve the level a single answer maps to under `scoring`.
///
/// Total over any scoring/answer pair. A shape mismatch or unknown label
/// resolves to level 1; a numeric answer outside every configured range
/// resolves to the highest stored level. Neither can happen on a validated
/// configuration — both are guarded degenerate cases, logged so callers can
/// surface the data-quality problem rather than treat them as ordinary
/// control flow.
pub fn level_for_part(part: &QuestionPart, scoring: &PartScoring, answer: &AnswerValue) -> u32 {
    match (scoring, answer) {
        (PartScoring::Boolean(boolean), AnswerValue::Boolean(value)) => {
            if *value {
                boolean.when_true
            } else {
                boolean.when_false
            }
        }
        (PartScoring::Labelled(mapping), AnswerValue::Label(label)) => {
            match mapping.get(label) {
                Some(level) => *level,
                None => {
                    warn!(
                        part_id = %part.id,
                        label,
                        "label has no scoring entry; falling back to level 1"
                    );
                    1
                }
            }
        }
        (PartScoring::Numeric(ranges), AnswerValue::Number(value)) => {
            match ranges
                .iter()
                .find(|range| range.min <= *value && *value <= range.max)
            {
                Some(range) => range.level,
                None => {
                    let fallback = ranges.iter().map(|range| range.level).max().unwrap_or(1);
                    warn!(
                        part_id = %part.id,
                        value,
                        fallback,
                        "answer outside all configured ranges; falling back to highest level"
                    );
                    fallback
                }
            }
        }
        (_, _) => {
            warn!(
                part_id = %part.id,
                answer_type = %part.answer_type,
                "answer shape does not match scoring shape; falling back to level 1"
            );
            1
        }
    }
}

/// Reduce the per-part levels of one question response to a single overall
/// level: arithmetic mean, rounded half-up. Parts are equally weighted by
/// design — there is no per-part importance.
pub fn overall_level(levels: &[u32]) -> Result<u32, ScoringError> {
    if levels.is_empty() {
        return Err(ScoringError::NoPartLevels);
    }
    let sum: u32 = levels.iter().sum();
    let mean = f64::from(sum) / levels.len() as f64;
    Ok(mean.round() as u32)
}
