//! Request handlers, grouped by operation.

pub mod annotators;
pub mod assignment;
pub mod catalogue;
pub mod leaderboard;
pub mod stats;
pub mod submission;
