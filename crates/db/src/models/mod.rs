//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row, plus the create DTO for inserts. There are
//! no update DTOs for annotations: the log is append-only.

pub mod annotation;
pub mod annotator;
pub mod feedback_option;
pub mod item;
pub mod playlist;
