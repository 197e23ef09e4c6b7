//! Exercise session domain model.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A started exercise and the prompts it still has to hand out.
///
/// Prompts are rendered once at start time and consumed from the front.
/// An exhausted session is kept as-is; callers cannot tell it apart from
/// a session that never existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Name of the exercise the prompts came from
    pub exercise_name: String,
    /// Difficulty the prompts were drawn at
    pub difficulty: u32,
    /// Remaining prompts, front first
    pub prompts: VecDeque<String>,
    /// Timestamp when the session was created (RFC 3339)
    pub created_at: String,
}

impl ExerciseSession {
    pub fn new(
        id: impl Into<String>,
        exercise_name: impl Into<String>,
        difficulty: u32,
        prompts: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            id: id.into(),
            exercise_name: exercise_name.into(),
            difficulty,
            prompts: prompts.into_iter().collect(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Removes and returns the front prompt.
    pub fn pop_prompt(&mut self) -> Option<String> {
        self.prompts.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.prompts.is_empty()
    }
}
