//! Annotator lifecycle: guest creation, lookup, and claim/upgrade.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use trick_core::error::CoreError;
use trick_core::types::DbId;
use trick_core::username;
use trick_db::models::annotator::{Annotator, ClaimAnnotator, CreateAnnotator};
use trick_db::repositories::AnnotatorRepo;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /annotators
///
/// Create a temporary (guest) annotator with a generated username.
/// The body is optional metadata; an empty object is fine.
pub async fn create_temporary(
    State(state): State<AppState>,
    Json(input): Json<CreateAnnotator>,
) -> AppResult<impl IntoResponse> {
    let source = input.source.as_deref().unwrap_or("web");
    let annotator = insert_with_generated_username(&state, source, input.is_turker).await?;

    tracing::info!(
        annotator_id = annotator.id,
        username = %annotator.username,
        source,
        is_turker = input.is_turker,
        "Temporary annotator created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: annotator })))
}

/// GET /annotators/{id}
pub async fn get_annotator(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let annotator = AnnotatorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Annotator",
            id,
        }))?;
    Ok(Json(DataResponse { data: annotator }))
}

/// POST /annotators/{id}/claim
///
/// Upgrade a temporary annotator to a permanent account in place. The
/// row id is unchanged, so annotation history and stats are untouched.
pub async fn claim_annotator(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ClaimAnnotator>,
) -> AppResult<impl IntoResponse> {
    if input.username.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "username must not be empty".to_string(),
        )));
    }

    let existing = AnnotatorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Annotator",
            id,
        }))?;
    if !existing.is_temporary {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Annotator {id} is already permanent"
        ))));
    }

    // Username/email collisions surface as uq_ violations and map to 409.
    let claimed = AnnotatorRepo::claim(&state.pool, id, &input.username, input.email.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(format!(
            "Annotator {id} is already permanent"
        ))))?;

    tracing::info!(
        annotator_id = claimed.id,
        username = %claimed.username,
        "Temporary annotator claimed"
    );

    Ok(Json(DataResponse { data: claimed }))
}

/// Insert a guest row, retrying plain generated names on collision and
/// falling back to a numeric suffix.
async fn insert_with_generated_username(
    state: &AppState,
    source: &str,
    is_turker: bool,
) -> Result<Annotator, AppError> {
    for _ in 0..username::MAX_PLAIN_ATTEMPTS {
        let name = username::generate(&mut rand::rng());
        match AnnotatorRepo::create_temporary(&state.pool, &name, source, is_turker).await {
            Ok(annotator) => return Ok(annotator),
            Err(err) if is_unique_violation(&err) => continue,
            Err(err) => return Err(err.into()),
        }
    }
    let name = username::generate_suffixed(&mut rand::rng());
    Ok(AnnotatorRepo::create_temporary(&state.pool, &name, source, is_turker).await?)
}
