//! Repository for the append-only annotation log and its aggregates.

use std::collections::HashMap;

use sqlx::PgPool;
use trick_core::leaderboard::RankedAnnotator;
use trick_core::stats::ScoredAnnotation;
use trick_core::types::{DbId, Timestamp};

use crate::models::annotation::{Annotation, AnnotationTimestamp, NewAnnotation};

/// Column list for annotations queries.
const COLUMNS: &str = "id, annotator_id, item_id, playlist_id, guessed_boundary, \
    points, attention_check, created_at";

/// Append and read access to the annotation log. No update or delete
/// methods exist: the log is append-only by design.
pub struct AnnotationRepo;

impl AnnotationRepo {
    /// Persist one submission atomically: the annotation row, its
    /// feedback links, an ad hoc "other" feedback option if free text was
    /// given, and the ordered client timestamp sequence.
    pub async fn create_submission(
        pool: &PgPool,
        input: &NewAnnotation,
        feedback_option_ids: &[DbId],
        other_reason: Option<&str>,
        timestamps: &[Timestamp],
    ) -> Result<Annotation, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO annotations
                (annotator_id, item_id, playlist_id, guessed_boundary,
                 points, attention_check)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let annotation = sqlx::query_as::<_, Annotation>(&query)
            .bind(input.annotator_id)
            .bind(input.item_id)
            .bind(input.playlist_id)
            .bind(input.guessed_boundary)
            .bind(input.points)
            .bind(input.attention_check)
            .fetch_one(&mut *tx)
            .await?;

        for option_id in feedback_option_ids {
            sqlx::query(
                "INSERT INTO annotation_feedback (annotation_id, feedback_option_id)
                 VALUES ($1, $2)",
            )
            .bind(annotation.id)
            .bind(option_id)
            .execute(&mut *tx)
            .await?;
        }

        if let Some(text) = other_reason {
            // One fresh row per submission; identical free text is allowed
            // to create duplicate option rows.
            let (option_id,): (DbId,) = sqlx::query_as(
                "INSERT INTO feedback_options (short_name, category, description, is_default)
                 VALUES ($1, 'other', $1, FALSE)
                 RETURNING id",
            )
            .bind(text)
            .fetch_one(&mut *tx)
            .await?;

            sqlx::query(
                "INSERT INTO annotation_feedback (annotation_id, feedback_option_id)
                 VALUES ($1, $2)",
            )
            .bind(annotation.id)
            .bind(option_id)
            .execute(&mut *tx)
            .await?;
        }

        for (position, recorded_at) in timestamps.iter().enumerate() {
            sqlx::query(
                "INSERT INTO annotation_timestamps (annotation_id, position, recorded_at)
                 VALUES ($1, $2, $3)",
            )
            .bind(annotation.id)
            .bind(position as i32)
            .bind(recorded_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(annotation)
    }

    /// The annotator's most recent annotation for an item, if any. Used
    /// to pre-fill review mode.
    pub async fn find_prior(
        pool: &PgPool,
        annotator_id: DbId,
        item_id: DbId,
    ) -> Result<Option<Annotation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM annotations
             WHERE annotator_id = $1 AND item_id = $2
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(annotator_id)
            .bind(item_id)
            .fetch_optional(pool)
            .await
    }

    /// Count of the annotator's completed skill annotations (attention
    /// checks excluded).
    pub async fn completed_count(pool: &PgPool, annotator_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM annotations
             WHERE annotator_id = $1 AND NOT attention_check",
        )
        .bind(annotator_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Distinct-annotator coverage per item, optionally scoped to a
    /// playlist. Items with no annotations are absent from the map.
    pub async fn coverage_counts(
        pool: &PgPool,
        playlist_id: Option<DbId>,
    ) -> Result<HashMap<DbId, i64>, sqlx::Error> {
        let rows: Vec<(DbId, i64)> = sqlx::query_as(
            "SELECT a.item_id, COUNT(DISTINCT a.annotator_id)
             FROM annotations a
             JOIN evaluation_items i ON i.id = a.item_id
             WHERE ($1::BIGINT IS NULL OR i.playlist_id = $1)
             GROUP BY a.item_id",
        )
        .bind(playlist_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    /// The annotator's scored annotations for aggregation, with the
    /// attention-check flag selecting skill rows (`false`) or compliance
    /// rows (`true`), optionally scoped to a playlist.
    pub async fn scored_for_annotator(
        pool: &PgPool,
        annotator_id: DbId,
        playlist_id: Option<DbId>,
        attention_check: bool,
    ) -> Result<Vec<ScoredAnnotation>, sqlx::Error> {
        let rows: Vec<(i32, i32, i32)> = sqlx::query_as(
            "SELECT a.guessed_boundary, i.true_boundary, a.points
             FROM annotations a
             JOIN evaluation_items i ON i.id = a.item_id
             WHERE a.annotator_id = $1
               AND a.attention_check = $2
               AND ($3::BIGINT IS NULL OR i.playlist_id = $3)
             ORDER BY a.created_at",
        )
        .bind(annotator_id)
        .bind(attention_check)
        .bind(playlist_id)
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(guessed_boundary, true_boundary, points)| ScoredAnnotation {
                guessed_boundary,
                true_boundary,
                points,
            })
            .collect())
    }

    /// Full point ordering for the leaderboard: permanent annotators
    /// only, attention checks excluded, zero-point annotators dropped,
    /// points descending with annotator id as the stable tie break.
    pub async fn leaderboard_totals(pool: &PgPool) -> Result<Vec<RankedAnnotator>, sqlx::Error> {
        let rows: Vec<(DbId, String, i64)> = sqlx::query_as(
            "SELECT u.id, u.username, SUM(a.points)::BIGINT AS total
             FROM annotations a
             JOIN annotators u ON u.id = a.annotator_id
             WHERE NOT u.is_temporary AND NOT a.attention_check
             GROUP BY u.id, u.username
             HAVING SUM(a.points) > 0
             ORDER BY total DESC, u.id ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(annotator_id, display_name, points)| RankedAnnotator {
                annotator_id,
                display_name,
                points,
            })
            .collect())
    }

    /// The ordered timestamp sequence for one annotation.
    pub async fn timestamps_for(
        pool: &PgPool,
        annotation_id: DbId,
    ) -> Result<Vec<AnnotationTimestamp>, sqlx::Error> {
        sqlx::query_as::<_, AnnotationTimestamp>(
            "SELECT id, annotation_id, position, recorded_at
             FROM annotation_timestamps
             WHERE annotation_id = $1
             ORDER BY position ASC",
        )
        .bind(annotation_id)
        .fetch_all(pool)
        .await
    }
}
