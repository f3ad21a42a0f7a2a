//! Structural validation of a question's scoring configuration.
//!
//! Validation never short-circuits: every part is checked independently and
//! every problem is reported, so an editing UI can show the full picture in
//! one pass. The validator is pure — it inspects, it never repairs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use canvass_core::models::part::{AnswerDomain, QuestionPart};
use canvass_core::models::scoring::{NumericRange, PartScoring, WeightedScoringConfig};

/// How serious a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    /// The configuration must not be saved or scored against.
    Error,
    /// Tolerated drift; scoring still works but cleanup is advised.
    Warning,
}

/// One structural problem found in a scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[error("{message}")]
#[ts(export)]
pub struct Violation {
    pub part_id: Uuid,
    pub severity: Severity,
    pub message: String,
}

impl Violation {
    fn error(part_id: Uuid, message: String) -> Self {
        Self {
            part_id,
            severity: Severity::Error,
            message,
        }
    }

    fn warning(part_id: Uuid, message: String) -> Self {
        Self {
            part_id,
            severity: Severity::Warning,
            message,
        }
    }
}

/// Validate `config` against the question's live parts and rating scale
/// size. An empty result means the configuration is structurally sound.
///
/// Scoring is independent per part by design, so there are no cross-part
/// checks. A `max_level` of 1 forces every level choice but the structural
/// checks still apply in full.
pub fn validate_config(
    config: &WeightedScoringConfig,
    parts: &[QuestionPart],
    max_level: u32,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for part in parts {
        match config.part_scoring.get(&part.id) {
            Some(scoring) => validate_part(part, scoring, max_level, &mut violations),
            None => violations.push(Violation::error(
                part.id,
                format!("part '{}' has no scoring entry", part.text),
            )),
        }
    }

    let live: BTreeSet<Uuid> = parts.iter().map(|part| part.id).collect();
    for part_id in config.part_scoring.keys() {
        if !live.contains(part_id) {
            violations.push(Violation::warning(
                *part_id,
                format!("scoring entry {part_id} refers to a part that no longer exists"),
            ));
        }
    }

    violations
}

fn validate_part(
    part: &QuestionPart,
    scoring: &PartScoring,
    max_level: u32,
    violations: &mut Vec<Violation>,
) {
    let domain = match part.domain() {
        Ok(domain) => domain,
        Err(err) => {
            violations.push(Violation::error(part.id, err.to_string()));
            return;
        }
    };

    match (domain, scoring) {
        (AnswerDomain::Boolean, PartScoring::Boolean(boolean)) => {
            for (outcome, level) in [("true", boolean.when_true), ("false", boolean.when_false)] {
                if !level_in_range(level, max_level) {
                    violations.push(Violation::error(
                        part.id,
                        format!(
                            "part '{}': level {} for answer '{}' is outside [1, {}]",
                            part.text, level, outcome, max_level
                        ),
                    ));
                }
            }
        }
        (AnswerDomain::Labelled(labels), PartScoring::Labelled(mapping)) => {
            for label in labels {
                if !mapping.contains_key(label) {
                    violations.push(Violation::error(
                        part.id,
                        format!("part '{}': label '{}' is not mapped to a level", part.text, label),
                    ));
                }
            }
            for (label, level) in mapping {
                if !level_in_range(*level, max_level) {
                    violations.push(Violation::error(
                        part.id,
                        format!(
                            "part '{}': level {} for label '{}' is outside [1, {}]",
                            part.text, level, label, max_level
                        ),
                    ));
                }
                if !labels.contains(label) {
                    violations.push(Violation::warning(
                        part.id,
                        format!(
                            "part '{}': label '{}' is mapped but no longer among the part's labels",
                            part.text, label
                        ),
                    ));
                }
            }
        }
        (AnswerDomain::Numeric { min, max }, PartScoring::Numeric(ranges)) => {
            validate_ranges(part, ranges, min, max, max_level, violations);
        }
        (_, _) => violations.push(Violation::error(
            part.id,
            format!(
                "part '{}': scoring entry shape does not match answer type '{}'",
                part.text, part.answer_type
            ),
        )),
    }
}

fn validate_ranges(
    part: &QuestionPart,
    ranges: &[NumericRange],
    min: f64,
    max: f64,
    max_level: u32,
    violations: &mut Vec<Violation>,
) {
    if ranges.is_empty() {
        violations.push(Violation::error(
            part.id,
            format!("part '{}': no scoring ranges configured", part.text),
        ));
        return;
    }

    for range in ranges {
        if range.min > range.max {
            violations.push(Violation::error(
                part.id,
                format!(
                    "part '{}': range [{}, {}] has min greater than max",
                    part.text, range.min, range.max
                ),
            ));
        }
        if range.min < min || range.max > max {
            violations.push(Violation::error(
                part.id,
                format!(
                    "part '{}': range [{}, {}] lies outside the declared domain [{}, {}]",
                    part.text, range.min, range.max, min, max
                ),
            ));
        }
        if !level_in_range(range.level, max_level) {
            violations.push(Violation::error(
                part.id,
                format!(
                    "part '{}': level {} for range [{}, {}] is outside [1, {}]",
                    part.text, range.level, range.min, range.max, max_level
                ),
            ));
        }
    }

    let sorted = sorted_by_min(ranges);

    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            let (a, b) = (&sorted[i], &sorted[j]);
            if a.min <= b.max && b.min <= a.max {
                violations.push(Violation::error(
                    part.id,
                    format!(
                        "part '{}': ranges [{}, {}] and [{}, {}] overlap",
                        part.text, a.min, a.max, b.min, b.max
                    ),
                ));
            }
        }
    }

    // Adjacent ranges may sit up to one unit apart ([0,24] then [25,49]);
    // anything wider is a gap.
    if let Some(first) = sorted.first()
        && first.min > min + 1.0
    {
        violations.push(Violation::error(
            part.id,
            format!(
                "part '{}': ranges do not cover the start of the domain (first range begins at {}, domain begins at {})",
                part.text, first.min, min
            ),
        ));
    }
    for pair in sorted.windows(2) {
        if pair[1].min > pair[0].max + 1.0 {
            violations.push(Violation::error(
                part.id,
                format!(
                    "part '{}': gap between {} and {} leaves part of the domain unscored",
                    part.text, pair[0].max, pair[1].min
                ),
            ));
        }
    }
    let covered_max = sorted.iter().map(|range| range.max).fold(f64::MIN, f64::max);
    if covered_max < max {
        violations.push(Violation::error(
            part.id,
            format!(
                "part '{}': ranges stop at {} and never reach the domain max {}",
                part.text, covered_max, max
            ),
        ));
    }
}

/// Canonical ordering for all coverage checks: ascending by `min`. Sorting
/// happens once here rather than ad hoc at each check.
fn sorted_by_min(ranges: &[NumericRange]) -> Vec<NumericRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by(|a, b| a.min.total_cmp(&b.min));
    sorted
}

fn level_in_range(level: u32, max_level: u32) -> bool {
    (1..=max_level).contains(&level)
}
