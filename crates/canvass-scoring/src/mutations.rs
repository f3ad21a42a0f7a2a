//! Lifecycle edits that keep a scoring configuration keyed by exactly the
//! question's live part set.
//!
//! Every helper takes the current document by value and returns either a
//! fully updated document or the input unchanged — never half-written state.
//! `None` stands for "scoring not yet defined".
//!
//! Edits to a part's answer type or domain are deliberately not handled
//! here: the stale entry stays in place and fails validation, which is the
//! caller's signal that re-configuration is required. Regenerating on domain
//! edits would silently erase user customization.

use uuid::Uuid;

use canvass_core::models::part::QuestionPart;
use canvass_core::models::scoring::WeightedScoringConfig;

use crate::defaults::{DefaultPolicy, generate_default_with};
use crate::error::ScoringError;

/// Seed a default scoring entry for a newly created part, creating the
/// document if this is the question's first entry.
pub fn on_part_created(
    config: Option<WeightedScoringConfig>,
    part: &QuestionPart,
    max_level: u32,
) -> Result<Option<WeightedScoringConfig>, ScoringError> {
    on_part_created_with(config, part, max_level, DefaultPolicy::default())
}

/// [`on_part_created`] with an explicit default policy.
pub fn on_part_created_with(
    config: Option<WeightedScoringConfig>,
    part: &QuestionPart,
    max_level: u32,
    policy: DefaultPolicy,
) -> Result<Option<WeightedScoringConfig>, ScoringError> {
    let Some(default) = generate_default_with(part, max_level, policy)? else {
        // Answer kinds with no default leave the document untouched.
        return Ok(config);
    };
    let mut config = config.unwrap_or_default();
    config.part_scoring.insert(part.id, default);
    Ok(Some(config))
}

/// Drop a deleted part's entry. Removing the last entry discards the whole
/// document — the question reverts to "scoring not yet defined".
pub fn on_part_deleted(
    config: Option<WeightedScoringConfig>,
    part_id: Uuid,
) -> Option<WeightedScoringConfig> {
    let mut config = config?;
    config.part_scoring.remove(&part_id);
    if config.part_scoring.is_empty() {
        None
    } else {
        Some(config)
    }
}

/// Copy the source part's entry for its duplicate. The duplicate shares the
/// source's domain, so the copied entry stays valid without re-validation.
/// A source that was never configured gets a fresh default instead.
pub fn on_part_duplicated(
    config: Option<WeightedScoringConfig>,
    source_id: Uuid,
    duplicate: &QuestionPart,
    max_level: u32,
) -> Result<Option<WeightedScoringConfig>, ScoringError> {
    let copied = config
        .as_ref()
        .and_then(|config| config.part_scoring.get(&source_id))
        .cloned();
    match copied {
        Some(entry) => {
            let mut config = config.unwrap_or_default();
            config.part_scoring.insert(duplicate.id, entry);
            Ok(Some(config))
        }
        None => on_part_created(config, duplicate, max_level),
    }
}
