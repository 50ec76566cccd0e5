//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod annotation_repo;
pub mod annotator_repo;
pub mod feedback_option_repo;
pub mod item_repo;
pub mod playlist_repo;

pub use annotation_repo::AnnotationRepo;
pub use annotator_repo::AnnotatorRepo;
pub use feedback_option_repo::FeedbackOptionRepo;
pub use item_repo::ItemRepo;
pub use playlist_repo::PlaylistRepo;
