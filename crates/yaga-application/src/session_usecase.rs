//! Exercise session use case.
//!
//! Implements the two-step session handshake behind the HTTP surface:
//! `start` materializes a fixed number of chord prompts under a fresh id,
//! `next` hands them out one at a time.

use std::sync::Arc;
use uuid::Uuid;

use yaga_core::config::SessionConfig;
use yaga_core::error::Result;
use yaga_core::exercise::{ChordPractice, Exercise};
use yaga_core::session::{ExerciseSession, SessionRepository};

/// Outcome of asking a session for its next prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPrompt {
    Prompt(String),
    /// The session is exhausted or was never started.
    Complete,
}

impl NextPrompt {
    pub fn is_complete(&self) -> bool {
        matches!(self, NextPrompt::Complete)
    }
}

/// Use case for chord practice sessions.
///
/// The exercise is always chord practice; difficulty and prompt count come
/// from `SessionConfig` (3 and 5 unless configured otherwise).
pub struct ExerciseSessionUseCase {
    /// Store for started sessions
    session_repository: Arc<dyn SessionRepository>,
    settings: SessionConfig,
}

impl ExerciseSessionUseCase {
    pub fn new(session_repository: Arc<dyn SessionRepository>, settings: SessionConfig) -> Self {
        Self {
            session_repository,
            settings,
        }
    }

    /// Starts a session and returns its id.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownDifficulty` if the configured difficulty is not in
    /// the table, or with whatever the repository reports.
    pub async fn start(&self) -> Result<String> {
        let exercise = ChordPractice::new(self.settings.difficulty);
        let prompts = exercise
            .generate_exercise()
            .take(self.settings.prompt_count)
            .map(|prompt| prompt.map(|p| p.display_text()))
            .collect::<Result<Vec<_>>>()?;

        let session_id = Uuid::new_v4().to_string();
        let session = ExerciseSession::new(
            session_id.clone(),
            exercise.name(),
            exercise.difficulty(),
            prompts,
        );
        self.session_repository.insert(session).await?;

        tracing::info!(
            "Started {} session {} (difficulty {}, {} prompts)",
            exercise.name(),
            session_id,
            self.settings.difficulty,
            self.settings.prompt_count
        );
        Ok(session_id)
    }

    /// Returns the next prompt of a session.
    ///
    /// Unknown and exhausted sessions both yield `NextPrompt::Complete`, and
    /// keep doing so on every later call.
    pub async fn next(&self, session_id: &str) -> Result<NextPrompt> {
        let next = match self.session_repository.pop_prompt(session_id).await? {
            Some(prompt) => NextPrompt::Prompt(prompt),
            None => NextPrompt::Complete,
        };
        tracing::debug!("next: session={} -> {:?}", session_id, next);
        Ok(next)
    }
}
