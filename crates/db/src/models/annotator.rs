//! Annotator identity model.
//!
//! Every visitor gets a real `annotators` row: guests are rows with
//! `is_temporary = true`, and claiming an account upgrades that same row
//! in place. Annotation history hangs off the row id, so an upgrade never
//! orphans it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trick_core::types::{DbId, Timestamp};

/// A row from the `annotators` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Annotator {
    pub id: DbId,
    pub username: String,
    pub email: Option<String>,
    pub is_temporary: bool,
    pub is_turker: bool,
    /// Registration channel (e.g. `"web"`, `"mturk"`).
    pub source: String,
    pub created_at: Timestamp,
}

/// DTO for creating a temporary (guest) annotator.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnnotator {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub is_turker: bool,
}

/// DTO for claiming a temporary annotator as a permanent account.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimAnnotator {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}
