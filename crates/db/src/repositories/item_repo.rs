//! Repository for the `evaluation_items` table.

use sqlx::types::Json;
use sqlx::PgPool;
use trick_core::types::DbId;

use crate::models::item::{CreateEvaluationItem, EvaluationItem};

/// Column list for evaluation_items queries.
const COLUMNS: &str = "id, playlist_id, prompt_sentences, continuation_sentences, \
    true_boundary, decoding_param, created_at";

/// Read access to the item store (plus inserts for import and fixtures).
pub struct ItemRepo;

impl ItemRepo {
    /// Insert an item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEvaluationItem,
    ) -> Result<EvaluationItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO evaluation_items
                (playlist_id, prompt_sentences, continuation_sentences,
                 true_boundary, decoding_param)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EvaluationItem>(&query)
            .bind(input.playlist_id)
            .bind(Json(&input.prompt_sentences))
            .bind(Json(&input.continuation_sentences))
            .bind(input.true_boundary)
            .bind(input.decoding_param)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EvaluationItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM evaluation_items WHERE id = $1");
        sqlx::query_as::<_, EvaluationItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// IDs of items the annotator has no annotation for, optionally
    /// scoped to a playlist. This is the selector's candidate universe.
    pub async fn unseen_ids(
        pool: &PgPool,
        annotator_id: DbId,
        playlist_id: Option<DbId>,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT i.id FROM evaluation_items i
             WHERE ($2::BIGINT IS NULL OR i.playlist_id = $2)
               AND NOT EXISTS (
                   SELECT 1 FROM annotations a
                   WHERE a.item_id = i.id AND a.annotator_id = $1
               )
             ORDER BY i.id",
        )
        .bind(annotator_id)
        .bind(playlist_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
