//! Session domain module.
//!
//! - `model`: the `ExerciseSession` entity
//! - `repository`: storage trait for sessions

mod model;
mod repository;

pub use model::ExerciseSession;
pub use repository::SessionRepository;

/// Message returned once a session has no prompts left.
pub const COMPLETION_MESSAGE: &str = "Exercise complete";
