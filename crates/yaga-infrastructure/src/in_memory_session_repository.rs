//! In-memory session repository.
//!
//! Sessions live for the life of the process. There is no eviction and no
//! capacity bound; exhausted sessions stay in the map.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use yaga_core::error::Result;
use yaga_core::session::{ExerciseSession, SessionRepository};

/// Process-local session store guarded by a single mutex.
///
/// The lock is held for the whole check-and-pop in `pop_prompt`, so two
/// concurrent requests against one session are serialized.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<Mutex<HashMap<String, ExerciseSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: ExerciseSession) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn pop_prompt(&self, session_id: &str) -> Result<Option<String>> {
        let mut sessions = self.sessions.lock().await;
        let prompt = sessions
            .get_mut(session_id)
            .and_then(ExerciseSession::pop_prompt);
        tracing::debug!(
            "pop_prompt: session={} hit={}",
            session_id,
            prompt.is_some()
        );
        Ok(prompt)
    }

    async fn remaining(&self, session_id: &str) -> Result<Option<usize>> {
        let sessions = self.sessions.lock().await;
        Ok(sessions.get(session_id).map(ExerciseSession::remaining))
    }

    async fn count(&self) -> Result<usize> {
        let sessions = self.sessions.lock().await;
        Ok(sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn session(id: &str, prompts: &[&str]) -> ExerciseSession {
        ExerciseSession::new(
            id,
            "Chord Practice",
            3,
            prompts.iter().map(|p| p.to_string()),
        )
    }

    #[tokio::test]
    async fn test_insert_and_pop() {
        let repo = InMemorySessionRepository::new();
        repo.insert(session("s1", &["C", "Am"])).await.unwrap();

        assert_eq!(repo.remaining("s1").await.unwrap(), Some(2));
        assert_eq!(repo.pop_prompt("s1").await.unwrap().as_deref(), Some("C"));
        assert_eq!(repo.pop_prompt("s1").await.unwrap().as_deref(), Some("Am"));
        assert_eq!(repo.pop_prompt("s1").await.unwrap(), None);
        assert_eq!(repo.remaining("s1").await.unwrap(), Some(0));
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let repo = InMemorySessionRepository::new();
        assert_eq!(repo.pop_prompt("missing").await.unwrap(), None);
        assert_eq!(repo.remaining("missing").await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_exhausted_sessions_are_kept() {
        let repo = InMemorySessionRepository::new();
        repo.insert(session("s1", &["G"])).await.unwrap();
        repo.pop_prompt("s1").await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemorySessionRepository::new();
        let other = repo.clone();
        repo.insert(session("s1", &["E"])).await.unwrap();
        assert_eq!(other.pop_prompt("s1").await.unwrap().as_deref(), Some("E"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_pops_never_duplicate() {
        let prompts: Vec<String> = (0..200).map(|i| format!("p{i}")).collect();
        let repo = InMemorySessionRepository::new();
        repo.insert(ExerciseSession::new("s1", "Chord Practice", 3, prompts.clone()))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                let mut got = Vec::new();
                while let Some(prompt) = repo.pop_prompt("s1").await.unwrap() {
                    got.push(prompt);
                }
                got
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for prompt in handle.await.unwrap() {
                assert!(seen.insert(prompt), "prompt handed out twice");
            }
        }
        assert_eq!(seen.len(), prompts.len());
    }
}
