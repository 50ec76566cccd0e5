//! Feedback option model: the reasons an annotator can attach to a guess.

use serde::Serialize;
use sqlx::FromRow;
use trick_core::types::{DbId, Timestamp};

/// A row from the `feedback_options` table.
///
/// Default options (grammar, repetition, entailment, sense) are seeded by
/// migration and unique by short name. Non-default options are created ad
/// hoc from free-text "other" reasons, one per submission, no dedup.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FeedbackOption {
    pub id: DbId,
    pub short_name: String,
    pub category: String,
    pub description: String,
    pub is_default: bool,
    pub created_at: Timestamp,
}
