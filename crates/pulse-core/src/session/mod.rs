//! Session domain module.
//!
//! Contains the persisted session model and the repository seam used to
//! store it.

mod model;
mod repository;

// Re-export public API
pub use model::{Session, normalize_username};
pub use repository::SessionRepository;
