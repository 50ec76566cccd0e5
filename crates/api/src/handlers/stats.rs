//! Per-annotator profile statistics.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use trick_core::error::CoreError;
use trick_core::stats::{build_user_stats, trophies, Trophy, UserStats};
use trick_core::types::DbId;
use trick_db::repositories::{AnnotationRepo, AnnotatorRepo, PlaylistRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Optional playlist scope for a stats query.
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub playlist_id: Option<DbId>,
}

/// Profile payload: the stats plus derived trophies.
#[derive(Debug, Serialize)]
pub struct ProfileStats {
    pub username: String,
    pub stats: UserStats,
    pub trophies: Vec<Trophy>,
}

/// GET /profiles/{username}/stats
///
/// Skill aggregates only: attention-check annotations are never included.
pub async fn user_stats(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<StatsQuery>,
) -> AppResult<impl IntoResponse> {
    let annotator = AnnotatorRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No annotator named '{username}'")))?;

    if let Some(playlist_id) = query.playlist_id {
        PlaylistRepo::find_by_id(&state.pool, playlist_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Playlist",
                id: playlist_id,
            }))?;
    }

    let rows =
        AnnotationRepo::scored_for_annotator(&state.pool, annotator.id, query.playlist_id, false)
            .await?;
    let stats = build_user_stats(rows);
    let trophies = trophies(&stats);

    Ok(Json(DataResponse {
        data: ProfileStats {
            username: annotator.username,
            stats,
            trophies,
        },
    }))
}
