use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// `NotFound` and `Validation` cover the two caller-visible failure modes
/// of the core operations (missing entity, malformed submission);
/// `Conflict` covers claim collisions on username/email.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
