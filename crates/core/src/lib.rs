//! Pure domain logic for the boundary-detection annotation platform.
//!
//! Everything in this crate is synchronous and I/O free: the scoring
//! convention, the assignment candidate policy, per-user statistics,
//! leaderboard ranking, and guest username generation. The `db` and `api`
//! crates compose these functions with storage and HTTP.

pub mod error;
pub mod leaderboard;
pub mod scoring;
pub mod selection;
pub mod stats;
pub mod types;
pub mod username;
