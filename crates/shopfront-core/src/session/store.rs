use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;

use super::model::Session;

/// In-memory session store, keyed by host message id.
///
/// The gateway is the only component that mutates entries, and every
/// mutation replaces the whole [`Session`] value, so readers never observe
/// a partially applied transition.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a session for its message, replacing any previous session
    /// on the same message (one session per live message).
    pub async fn insert(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.message_id.clone(), session);
    }

    /// Snapshot of the session for a message, if one is live.
    pub async fn get(&self, message_id: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(message_id).cloned()
    }

    /// Atomically replaces the stored session with its successor, but only
    /// while the stored generation still matches `expected_generation`.
    ///
    /// Returns false when the entry is gone or was advanced concurrently;
    /// the caller then treats the event as lost rather than overwriting
    /// newer state.
    pub async fn replace(&self, expected_generation: u64, next: Session) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get(&next.message_id) {
            Some(current) if current.generation == expected_generation => {
                sessions.insert(next.message_id.clone(), next);
                true
            }
            _ => false,
        }
    }

    /// Removes and returns the session for a message.
    pub async fn remove(&self, message_id: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(message_id)
    }

    /// Removes every session idle for at least `idle_timeout`, returning
    /// the affected message ids.
    pub async fn sweep_expired(&self, idle_timeout: Duration) -> Vec<String> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let expired: Vec<String> = sessions
            .values()
            .filter(|session| session.is_expired(now, idle_timeout))
            .map(|session| session.message_id.clone())
            .collect();
        for message_id in &expired {
            sessions.remove(message_id);
        }
        expired
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// True when no session is live.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
