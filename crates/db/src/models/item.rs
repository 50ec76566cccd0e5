//! Evaluation item model: a prompt plus machine continuation with a known
//! ground-truth boundary. Immutable once imported.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use trick_core::types::{DbId, Timestamp};

/// A row from the `evaluation_items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EvaluationItem {
    pub id: DbId,
    pub playlist_id: Option<DbId>,
    pub prompt_sentences: Json<Vec<String>>,
    pub continuation_sentences: Json<Vec<String>>,
    /// 1-indexed count of human-written sentences in the displayed text.
    pub true_boundary: i32,
    /// Nucleus-sampling p used to generate the continuation, if known.
    pub decoding_param: Option<f64>,
    pub created_at: Timestamp,
}

/// DTO for inserting an item (offline import and test fixtures).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvaluationItem {
    pub playlist_id: Option<DbId>,
    pub prompt_sentences: Vec<String>,
    pub continuation_sentences: Vec<String>,
    pub true_boundary: i32,
    pub decoding_param: Option<f64>,
}
