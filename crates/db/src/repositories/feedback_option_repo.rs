//! Repository for the `feedback_options` table.

use std::collections::HashMap;

use sqlx::PgPool;
use trick_core::types::DbId;

use crate::models::feedback_option::FeedbackOption;

/// Column list for feedback_options queries.
const COLUMNS: &str = "id, short_name, category, description, is_default, created_at";

/// Lookup of default feedback options and per-annotation attachments.
/// Ad hoc "other" options are inserted inside the submission transaction,
/// not here.
pub struct FeedbackOptionRepo;

impl FeedbackOptionRepo {
    /// Map the given short names to the ids of the matching *default*
    /// options. Names with no default option are absent from the map;
    /// the caller decides whether that is a validation error.
    pub async fn default_ids_by_short_name(
        pool: &PgPool,
        short_names: &[String],
    ) -> Result<HashMap<String, DbId>, sqlx::Error> {
        let rows: Vec<(String, DbId)> = sqlx::query_as(
            "SELECT short_name, id FROM feedback_options
             WHERE is_default AND short_name = ANY($1)",
        )
        .bind(short_names)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    /// The feedback options attached to one annotation, defaults first.
    pub async fn list_for_annotation(
        pool: &PgPool,
        annotation_id: DbId,
    ) -> Result<Vec<FeedbackOption>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback_options f
             JOIN annotation_feedback af ON af.feedback_option_id = f.id
             WHERE af.annotation_id = $1
             ORDER BY f.is_default DESC, f.short_name ASC"
        );
        sqlx::query_as::<_, FeedbackOption>(&query)
            .bind(annotation_id)
            .fetch_all(pool)
            .await
    }
}
