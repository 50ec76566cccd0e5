//! Repository for the `annotators` table.

use sqlx::PgPool;
use trick_core::types::DbId;

use crate::models::annotator::Annotator;

/// Column list for annotators queries.
const COLUMNS: &str = "id, username, email, is_temporary, is_turker, source, created_at";

/// Identity storage: guest creation, lookup, and in-place claim/upgrade.
pub struct AnnotatorRepo;

impl AnnotatorRepo {
    /// Create a temporary (guest) annotator with a generated username.
    pub async fn create_temporary(
        pool: &PgPool,
        username: &str,
        source: &str,
        is_turker: bool,
    ) -> Result<Annotator, sqlx::Error> {
        let query = format!(
            "INSERT INTO annotators (username, is_temporary, is_turker, source)
             VALUES ($1, TRUE, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Annotator>(&query)
            .bind(username)
            .bind(is_turker)
            .bind(source)
            .fetch_one(pool)
            .await
    }

    /// Find an annotator by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Annotator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM annotators WHERE id = $1");
        sqlx::query_as::<_, Annotator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an annotator by username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Annotator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM annotators WHERE username = $1");
        sqlx::query_as::<_, Annotator>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Upgrade a temporary annotator to a permanent account in place.
    ///
    /// The row keeps its id, so the annotation history is untouched.
    /// Returns `None` if the annotator does not exist or is already
    /// permanent; username/email collisions surface as unique violations.
    pub async fn claim(
        pool: &PgPool,
        id: DbId,
        username: &str,
        email: Option<&str>,
    ) -> Result<Option<Annotator>, sqlx::Error> {
        let query = format!(
            "UPDATE annotators
             SET username = $2, email = $3, is_temporary = FALSE
             WHERE id = $1 AND is_temporary
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Annotator>(&query)
            .bind(id)
            .bind(username)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
