//! Read-only item and playlist catalogue.
//!
//! Items and playlists are written by the offline import process, never
//! through this API.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use trick_core::error::CoreError;
use trick_core::types::DbId;
use trick_db::repositories::{ItemRepo, PlaylistRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /playlists
pub async fn list_playlists(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let playlists = PlaylistRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: playlists }))
}

/// GET /items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EvaluationItem",
            id,
        }))?;
    Ok(Json(DataResponse { data: item }))
}
