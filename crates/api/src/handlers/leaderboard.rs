//! The global leaderboard view.

use std::time::Duration;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use trick_core::leaderboard::build_leaderboard;
use trick_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the leaderboard endpoint.
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// The requesting annotator, whose own rank is reported even when
    /// they fall outside the public top N.
    pub annotator_id: DbId,
}

/// GET /leaderboard
///
/// Top-N permanent annotators by points, names masked, served from the
/// process-wide cache.
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> AppResult<impl IntoResponse> {
    let ttl = Duration::from_secs(state.config.leaderboard_ttl_secs);
    let rows = state.leaderboard_cache.rows(&state.pool, ttl).await?;
    let board = build_leaderboard(&rows, query.annotator_id);
    Ok(Json(DataResponse { data: board }))
}
