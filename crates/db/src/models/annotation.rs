//! Annotation log models.
//!
//! `annotations` rows are created exactly once per submission and never
//! mutated; feedback links and the timestamp sequence are attached in the
//! same transaction.

use serde::Serialize;
use sqlx::FromRow;
use trick_core::types::{DbId, Timestamp};

/// A row from the `annotations` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Annotation {
    pub id: DbId,
    pub annotator_id: DbId,
    pub item_id: DbId,
    pub playlist_id: Option<DbId>,
    pub guessed_boundary: i32,
    pub points: i32,
    pub attention_check: bool,
    pub created_at: Timestamp,
}

/// Fields for one annotation insert. Feedback links and timestamps travel
/// separately into [`AnnotationRepo::create_submission`].
///
/// [`AnnotationRepo::create_submission`]: crate::repositories::AnnotationRepo::create_submission
#[derive(Debug, Clone)]
pub struct NewAnnotation {
    pub annotator_id: DbId,
    pub item_id: DbId,
    pub playlist_id: Option<DbId>,
    pub guessed_boundary: i32,
    pub points: i32,
    pub attention_check: bool,
}

/// One ordered client timestamp attached to an annotation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AnnotationTimestamp {
    pub id: DbId,
    pub annotation_id: DbId,
    pub position: i32,
    pub recorded_at: Timestamp,
}
