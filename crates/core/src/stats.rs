//! Per-annotator performance aggregation.
//!
//! The aggregator derives correctness at read time from the raw
//! annotation log; nothing is recomputed or stored at write time.
//! Duplicate submissions (client replays) are counted as distinct data
//! points rather than deduplicated, which matches the append-only log.

use serde::Serialize;

use crate::scoring;

/// One scored annotation as read back from the log: the guess, the item's
/// true boundary, and the points recorded at submission time.
#[derive(Debug, Clone, Copy)]
pub struct ScoredAnnotation {
    pub guessed_boundary: i32,
    pub true_boundary: i32,
    pub points: i32,
}

/// Aggregated skill statistics for one annotator.
///
/// `points` and `avg_distance` are `None` when no annotations match the
/// requested scope, mirroring the "no data yet" state rather than
/// reporting zeros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub points: Option<i64>,
    pub total: i64,
    pub correct: i64,
    pub past_boundary: i64,
    pub avg_distance: Option<f64>,
}

/// Fold a sequence of scored annotations into [`UserStats`].
pub fn build_user_stats<I>(annotations: I) -> UserStats
where
    I: IntoIterator<Item = ScoredAnnotation>,
{
    let mut points: i64 = 0;
    let mut total: i64 = 0;
    let mut correct: i64 = 0;
    let mut past_boundary: i64 = 0;
    let mut distance_sum: i64 = 0;

    for a in annotations {
        points += i64::from(a.points);
        total += 1;
        let d = scoring::distance(a.guessed_boundary, a.true_boundary);
        distance_sum += i64::from(d);
        if d == 0 {
            correct += 1;
        }
        if d >= 0 {
            past_boundary += 1;
        }
    }

    if total == 0 {
        UserStats {
            points: None,
            total: 0,
            correct: 0,
            past_boundary: 0,
            avg_distance: None,
        }
    } else {
        UserStats {
            points: Some(points),
            total,
            correct,
            past_boundary,
            avg_distance: Some(distance_sum as f64 / total as f64),
        }
    }
}

/// Presentational badges derived from stats thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trophy {
    /// At least 25 annotations submitted.
    Regular,
    /// At least 100 annotations submitted.
    Centurion,
    /// At least 500 points accrued.
    PointHoarder,
    /// At least 10 annotations with an exact-hit rate of 50% or better.
    Sharpshooter,
}

/// Derive the trophy set for a stats summary. Stateless post-processing;
/// the order is display order.
pub fn trophies(stats: &UserStats) -> Vec<Trophy> {
    let mut earned = Vec::new();
    if stats.total >= 25 {
        earned.push(Trophy::Regular);
    }
    if stats.total >= 100 {
        earned.push(Trophy::Centurion);
    }
    if stats.points.unwrap_or(0) >= 500 {
        earned.push(Trophy::PointHoarder);
    }
    if stats.total >= 10 && stats.correct * 2 >= stats.total {
        earned.push(Trophy::Sharpshooter);
    }
    earned
}
