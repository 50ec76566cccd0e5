//! Annotation submission: validate and persist one guess.
//!
//! Points are stored as the client reports them; correctness and distance
//! are derived at read time by the stats aggregation. Nothing here
//! prevents a replayed request from inserting a second row for the same
//! (annotator, item) pair; the aggregates count such rows as distinct
//! data points.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use trick_core::error::CoreError;
use trick_core::types::{DbId, Timestamp};
use trick_db::models::annotation::NewAnnotation;
use trick_db::repositories::{AnnotationRepo, AnnotatorRepo, FeedbackOptionRepo, ItemRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// JSON body for the submit endpoint. Missing required fields are
/// rejected by deserialization before anything is persisted.
#[derive(Debug, Deserialize)]
pub struct SubmitAnnotation {
    pub annotator_id: DbId,
    pub item_id: DbId,
    #[serde(default)]
    pub playlist_id: Option<DbId>,
    pub guessed_boundary: i32,
    /// Client-computed score. Stored verbatim; see the module docs.
    pub points: i32,
    /// Short names of default feedback options.
    #[serde(default)]
    pub reasons: Vec<String>,
    /// Free-text "other" reason.
    #[serde(default)]
    pub other_reason: Option<String>,
    #[serde(default)]
    pub attention_check: bool,
    /// Ordered client-reported timestamps spanning the session.
    #[serde(default)]
    pub timestamps: Vec<Timestamp>,
}

/// Acknowledgement payload.
#[derive(Debug, Serialize)]
pub struct SubmissionAccepted {
    pub accepted: bool,
    pub annotation_id: DbId,
}

/// POST /annotations
///
/// Create exactly one annotation with its feedback links and timestamp
/// sequence, all in one transaction.
pub async fn submit_annotation(
    State(state): State<AppState>,
    Json(input): Json<SubmitAnnotation>,
) -> AppResult<impl IntoResponse> {
    AnnotatorRepo::find_by_id(&state.pool, input.annotator_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Annotator",
            id: input.annotator_id,
        }))?;
    ItemRepo::find_by_id(&state.pool, input.item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EvaluationItem",
            id: input.item_id,
        }))?;

    if input.guessed_boundary < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "guessed_boundary must be non-negative".to_string(),
        )));
    }

    let known = FeedbackOptionRepo::default_ids_by_short_name(&state.pool, &input.reasons).await?;
    let mut feedback_option_ids = Vec::with_capacity(input.reasons.len());
    for reason in &input.reasons {
        let id = known.get(reason).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown feedback option '{reason}'"
            )))
        })?;
        feedback_option_ids.push(*id);
    }

    let other_reason = input
        .other_reason
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let annotation = AnnotationRepo::create_submission(
        &state.pool,
        &NewAnnotation {
            annotator_id: input.annotator_id,
            item_id: input.item_id,
            playlist_id: input.playlist_id,
            guessed_boundary: input.guessed_boundary,
            points: input.points,
            attention_check: input.attention_check,
        },
        &feedback_option_ids,
        other_reason,
        &input.timestamps,
    )
    .await?;

    tracing::info!(
        annotator_id = input.annotator_id,
        item_id = input.item_id,
        annotation_id = annotation.id,
        guessed_boundary = input.guessed_boundary,
        attention_check = input.attention_check,
        "Annotation saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmissionAccepted {
                accepted: true,
                annotation_id: annotation.id,
            },
        }),
    ))
}
