//! Process-wide leaderboard cache.
//!
//! The full-log aggregate behind the leaderboard is the one expensive
//! read in the system, so its result is cached and refreshed inline when
//! a reader finds it older than the configured TTL. The cache is
//! invalidated only by time, never by writes: eventual consistency is the
//! accepted contract.
//!
//! The refresh is single-flight: concurrent readers that all observe a
//! stale cache serialize on the refresh mutex, the first one recomputes,
//! and the rest pick up the fresh entry on re-check. Redundant
//! recomputation would be harmless (the query is pure at a given log
//! state) but wasteful.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};
use trick_core::leaderboard::RankedAnnotator;
use trick_db::repositories::AnnotationRepo;
use trick_db::DbPool;

struct CacheEntry {
    computed_at: Instant,
    rows: Arc<Vec<RankedAnnotator>>,
}

/// Cached full point ordering for the leaderboard.
#[derive(Default)]
pub struct LeaderboardCache {
    entry: RwLock<Option<CacheEntry>>,
    refresh: Mutex<()>,
}

impl LeaderboardCache {
    pub fn new() -> Self {
        Self {
            entry: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    /// The current ordering, recomputed from the log if the cached copy
    /// is missing or older than `ttl`.
    pub async fn rows(
        &self,
        pool: &DbPool,
        ttl: Duration,
    ) -> Result<Arc<Vec<RankedAnnotator>>, sqlx::Error> {
        if let Some(rows) = self.fresh_rows(ttl).await {
            return Ok(rows);
        }

        let _guard = self.refresh.lock().await;

        // Another reader may have refreshed while we waited on the lock.
        if let Some(rows) = self.fresh_rows(ttl).await {
            return Ok(rows);
        }

        let rows = Arc::new(AnnotationRepo::leaderboard_totals(pool).await?);
        tracing::debug!(entries = rows.len(), "Leaderboard cache refreshed");
        *self.entry.write().await = Some(CacheEntry {
            computed_at: Instant::now(),
            rows: Arc::clone(&rows),
        });
        Ok(rows)
    }

    async fn fresh_rows(&self, ttl: Duration) -> Option<Arc<Vec<RankedAnnotator>>> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|e| e.computed_at.elapsed() < ttl)
            .map(|e| Arc::clone(&e.rows))
    }
}
