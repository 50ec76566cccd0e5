pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /annotations/next                 next assignment (?annotator_id, ?playlist_id, ?item_id)
/// /annotations                      submit annotation (POST)
///
/// /annotators                       create temporary annotator (POST)
/// /annotators/{id}                  get annotator
/// /annotators/{id}/claim            upgrade temporary -> permanent (POST)
///
/// /profiles/{username}/stats        per-annotator skill stats (?playlist_id)
///
/// /leaderboard                      top-N ranking (?annotator_id)
///
/// /playlists                        list playlists
/// /items/{id}                       get one evaluation item
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/annotations/next",
            get(handlers::assignment::next_assignment),
        )
        .route("/annotations", post(handlers::submission::submit_annotation))
        .route("/annotators", post(handlers::annotators::create_temporary))
        .route("/annotators/{id}", get(handlers::annotators::get_annotator))
        .route(
            "/annotators/{id}/claim",
            post(handlers::annotators::claim_annotator),
        )
        .route(
            "/profiles/{username}/stats",
            get(handlers::stats::user_stats),
        )
        .route("/leaderboard", get(handlers::leaderboard::leaderboard))
        .route("/playlists", get(handlers::catalogue::list_playlists))
        .route("/items/{id}", get(handlers::catalogue::get_item))
}
