//! Playlist model: a named, versioned grouping of evaluation items.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trick_core::types::{DbId, Timestamp};

/// A row from the `playlists` table. Membership (via
/// `evaluation_items.playlist_id`) is immutable after publishing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Playlist {
    pub id: DbId,
    pub short_name: String,
    pub version: i32,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a playlist (offline import and test fixtures).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylist {
    pub short_name: String,
    pub version: i32,
    pub name: String,
    pub description: String,
}
