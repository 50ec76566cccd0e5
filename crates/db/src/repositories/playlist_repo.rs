//! Repository for the `playlists` table.

use sqlx::PgPool;
use trick_core::types::DbId;

use crate::models::playlist::{CreatePlaylist, Playlist};

/// Column list for playlists queries.
const COLUMNS: &str = "id, short_name, version, name, description, created_at";

/// Read access to playlists (plus inserts for import and fixtures).
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Insert a playlist, returning the created row. Fails with a unique
    /// violation on a duplicate (short_name, version) pair.
    pub async fn create(pool: &PgPool, input: &CreatePlaylist) -> Result<Playlist, sqlx::Error> {
        let query = format!(
            "INSERT INTO playlists (short_name, version, name, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(&input.short_name)
            .bind(input.version)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a playlist by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all playlists, newest version of each name first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Playlist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM playlists ORDER BY short_name ASC, version DESC"
        );
        sqlx::query_as::<_, Playlist>(&query).fetch_all(pool).await
    }
}
