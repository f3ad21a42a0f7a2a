use thiserror::Error;
use uuid::Uuid;

use crate::models::part::AnswerType;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("part {part_id} declares answer type '{answer_type}' but its options payload does not match")]
    MismatchedOptions {
        part_id: Uuid,
        answer_type: AnswerType,
    },
}
