//! Assignment selection: which item does this annotator see next.
//!
//! Read-only; the annotation row is only created by the submission
//! handler. Two concurrent calls can observe the same under-covered item
//! and both hand it out, overshooting the coverage goal by at most the
//! number of in-flight calls. That bounded drift is accepted rather than
//! locked away.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use rand::Rng;
use serde::{Deserialize, Serialize};

use trick_core::error::CoreError;
use trick_core::scoring;
use trick_core::selection::{
    inject_attention_check, CandidatePool, ATTENTION_INSTRUCTION, MAX_SENTENCES,
};
use trick_core::types::DbId;
use trick_db::models::item::EvaluationItem;
use trick_db::repositories::{AnnotationRepo, AnnotatorRepo, ItemRepo, PlaylistRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the next-assignment endpoint.
#[derive(Debug, Deserialize)]
pub struct AssignmentQuery {
    pub annotator_id: DbId,
    pub playlist_id: Option<DbId>,
    /// Explicit item request: review mode, bypasses selection.
    pub item_id: Option<DbId>,
}

/// One assignment decision.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssignmentOutcome {
    Assigned(Assignment),
    /// The annotator has seen every item in the requested scope. A normal
    /// end-of-playlist condition, not an error.
    Exhausted,
}

/// The payload the annotation UI renders.
#[derive(Debug, Serialize)]
pub struct Assignment {
    pub item_id: DbId,
    pub playlist_id: Option<DbId>,
    /// Prompt sentences, with the attention-check instruction appended
    /// when one is injected.
    pub prompt: Vec<String>,
    /// Continuation sentences, capped at [`MAX_SENTENCES`].
    pub sentences: Vec<String>,
    pub true_boundary: i32,
    /// The annotator's previously recorded guess, set only in review mode.
    pub prior_boundary: Option<i32>,
    /// The annotator's completed skill annotations so far.
    pub completed: i64,
    /// Whether this presentation is an attention check.
    pub attention_check: bool,
}

/// GET /annotations/next
///
/// Pick the next unseen item for an annotator, or return the requested
/// item in review mode when `item_id` is given.
pub async fn next_assignment(
    State(state): State<AppState>,
    Query(query): Query<AssignmentQuery>,
) -> AppResult<impl IntoResponse> {
    let annotator = AnnotatorRepo::find_by_id(&state.pool, query.annotator_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Annotator",
            id: query.annotator_id,
        }))?;

    if let Some(playlist_id) = query.playlist_id {
        PlaylistRepo::find_by_id(&state.pool, playlist_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Playlist",
                id: playlist_id,
            }))?;
    }

    let completed = AnnotationRepo::completed_count(&state.pool, annotator.id).await?;

    // Review mode: explicit item, pre-filled with any prior guess.
    if let Some(item_id) = query.item_id {
        let item = ItemRepo::find_by_id(&state.pool, item_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "EvaluationItem",
                id: item_id,
            }))?;
        let prior = AnnotationRepo::find_prior(&state.pool, annotator.id, item_id).await?;

        tracing::info!(
            annotator_id = annotator.id,
            item_id,
            reviewed = prior.is_some(),
            "Explicit item requested"
        );

        return Ok(Json(DataResponse {
            data: AssignmentOutcome::Assigned(build_assignment(
                item,
                prior.map(|a| a.guessed_boundary),
                completed,
                false,
            )),
        }));
    }

    let unseen = ItemRepo::unseen_ids(&state.pool, annotator.id, query.playlist_id).await?;
    let coverage = AnnotationRepo::coverage_counts(&state.pool, query.playlist_id).await?;
    let pool = CandidatePool::stage(&unseen, &coverage, state.config.goal_coverage);

    // The thread-local RNG is !Send, so it must not be held across an
    // await; each use gets its own short-lived handle.
    let Some(item_id) = pool.pick(&mut rand::rng()) else {
        tracing::info!(
            annotator_id = annotator.id,
            playlist_id = ?query.playlist_id,
            "Assignment scope exhausted"
        );
        return Ok(Json(DataResponse {
            data: AssignmentOutcome::Exhausted,
        }));
    };

    let item = ItemRepo::find_by_id(&state.pool, item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EvaluationItem",
            id: item_id,
        }))?;

    let shown_len = item.prompt_sentences.len() + item.continuation_sentences.len().min(MAX_SENTENCES);
    let all_human = scoring::is_all_human(item.true_boundary, shown_len);
    let attention_check = inject_attention_check(
        annotator.is_turker,
        all_human,
        rand::rng().random::<f64>(),
        state.config.attention_check_rate,
    );

    tracing::info!(
        annotator_id = annotator.id,
        item_id,
        preferred = pool.preferred.len(),
        fallback = pool.fallback.len(),
        attention_check,
        "Item assigned"
    );

    Ok(Json(DataResponse {
        data: AssignmentOutcome::Assigned(build_assignment(item, None, completed, attention_check)),
    }))
}

fn build_assignment(
    item: EvaluationItem,
    prior_boundary: Option<i32>,
    completed: i64,
    attention_check: bool,
) -> Assignment {
    let mut prompt = item.prompt_sentences.0;
    if attention_check {
        prompt.push(ATTENTION_INSTRUCTION.to_string());
    }
    let mut sentences = item.continuation_sentences.0;
    sentences.truncate(MAX_SENTENCES);

    Assignment {
        item_id: item.id,
        playlist_id: item.playlist_id,
        prompt,
        sentences,
        true_boundary: item.true_boundary,
        prior_boundary,
        completed,
        attention_check,
    }
}
