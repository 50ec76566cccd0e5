//! Leaderboard ranking and display-name privacy.
//!
//! The db layer supplies per-annotator point totals already filtered
//! (non-temporary annotators, attention checks excluded, positive points)
//! and ordered by points descending with id ascending as the stable tie
//! break. This module turns those rows into the public top-N view and the
//! requesting annotator's own rank.

use serde::Serialize;

use crate::types::DbId;

/// Number of entries in the public leaderboard view.
pub const LEADERBOARD_SIZE: usize = 50;

/// One ranked row as produced by the aggregate query: full ordering, raw
/// display names.
#[derive(Debug, Clone)]
pub struct RankedAnnotator {
    pub annotator_id: DbId,
    pub display_name: String,
    pub points: i64,
}

/// A single public leaderboard entry (masked name).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub display_name: String,
    pub points: i64,
}

/// The public leaderboard view.
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
    /// 1-based rank of the requesting annotator, if they are ranked at
    /// all (temporary annotators and zero-point annotators are not).
    pub requester_rank: Option<usize>,
}

/// Build the top-N view and the requester's rank from the full ordering.
pub fn build_leaderboard(rows: &[RankedAnnotator], requester: DbId) -> Leaderboard {
    let requester_rank = rows
        .iter()
        .position(|r| r.annotator_id == requester)
        .map(|i| i + 1);

    let entries = rows
        .iter()
        .take(LEADERBOARD_SIZE)
        .enumerate()
        .map(|(i, r)| LeaderboardEntry {
            rank: i + 1,
            display_name: mask_display_name(&r.display_name),
            points: r.points,
        })
        .collect();

    Leaderboard {
        entries,
        requester_rank,
    }
}

/// Mask email-like display names so addresses used as usernames are not
/// leaked: the local part is kept and the domain is replaced.
///
/// Non-email names pass through unchanged.
pub fn mask_display_name(name: &str) -> String {
    match name.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            format!("{local}@\u{2026}")
        }
        _ => name.to_string(),
    }
}
