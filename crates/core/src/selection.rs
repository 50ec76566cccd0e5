//! Assignment candidate policy.
//!
//! Given the set of items an annotator has not yet seen and the current
//! coverage counts (distinct annotators per item), the policy is two
//! explicit stages:
//!
//! 1. **Preferred**: unseen items whose coverage is between 1 and the
//!    configured goal, inclusive. Zero-coverage items are deliberately
//!    left out so partially covered items finish before fresh ones start.
//! 2. **Fallback**: all unseen items in scope, coverage ignored. This is
//!    where brand-new items surface, and it guarantees the selector
//!    returns *something* as long as any unseen item exists.
//!
//! If both stages are empty the scope is exhausted, which is a normal
//! outcome as playlists finish, not a failure.
//!
//! The final pick within a stage is uniform-random; callers supply the
//! RNG so tests stay deterministic.

use std::collections::HashMap;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::DbId;

/// Maximum number of continuation sentences shown to the annotator.
pub const MAX_SENTENCES: usize = 9;

/// Instruction sentence appended to the prompt of an attention-check
/// presentation.
pub const ATTENTION_INSTRUCTION: &str =
    "To show that you are paying attention, please select the fifth sentence.";

/// The two candidate stages for one assignment decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    /// Unseen items with `1 <= coverage <= goal`.
    pub preferred: Vec<DbId>,
    /// All unseen items in scope.
    pub fallback: Vec<DbId>,
}

impl CandidatePool {
    /// Stage unseen items into preferred and fallback sets.
    ///
    /// `coverage` maps item id to the number of distinct annotators who
    /// have annotated it; absent entries mean zero coverage.
    pub fn stage(unseen: &[DbId], coverage: &HashMap<DbId, i64>, goal_coverage: i64) -> Self {
        let preferred = unseen
            .iter()
            .copied()
            .filter(|id| {
                let c = coverage.get(id).copied().unwrap_or(0);
                c >= 1 && c <= goal_coverage
            })
            .collect();
        Self {
            preferred,
            fallback: unseen.to_vec(),
        }
    }

    /// Pick uniformly from the preferred stage, falling back to the full
    /// unseen set. `None` means the scope is exhausted.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<DbId> {
        self.preferred
            .choose(rng)
            .or_else(|| self.fallback.choose(rng))
            .copied()
    }
}

/// Decide whether to turn an all-human presentation into an attention
/// check for an external crowd-worker.
///
/// `coin` is a uniform sample from `[0, 1)`; passing it in keeps the
/// decision deterministic under test.
pub fn inject_attention_check(is_turker: bool, all_human: bool, coin: f64, rate: f64) -> bool {
    is_turker && all_human && coin < rate
}
