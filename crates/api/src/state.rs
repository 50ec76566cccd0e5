use std::sync::Arc;

use crate::cache::LeaderboardCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trick_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process-wide leaderboard cache, refreshed inline on stale reads.
    pub leaderboard_cache: Arc<LeaderboardCache>,
}
