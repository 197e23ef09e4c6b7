//! Session repository trait.
//!
//! Defines the interface for storing exercise sessions.

use super::model::ExerciseSession;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store of exercise sessions.
///
/// This trait decouples the session use case from the storage mechanism so
/// tests can build an independent store per case.
///
/// # Implementation Notes
///
/// `pop_prompt` is a read-modify-write. Implementations must make it atomic
/// with respect to other calls on the same session id: two concurrent pops
/// never return the same prompt and never lose one.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a session, replacing any session with the same id.
    async fn insert(&self, session: ExerciseSession) -> Result<()>;

    /// Removes and returns the next prompt of a session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(prompt))`: the session had a prompt left
    /// - `Ok(None)`: the session is unknown or exhausted
    /// - `Err(_)`: the store itself failed
    async fn pop_prompt(&self, session_id: &str) -> Result<Option<String>>;

    /// Number of prompts left, or `None` for an unknown session.
    async fn remaining(&self, session_id: &str) -> Result<Option<usize>>;

    /// Number of stored sessions, exhausted ones included.
    async fn count(&self) -> Result<usize>;
}
