use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::nav::NavState;

/// Navigation state of one live interactive message.
///
/// Belongs to exactly one (viewer, message) pair and is replaced as a
/// whole on every applied transition, never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Host message this session renders into. Also the store key.
    pub message_id: String,
    /// Viewer who opened the widget; the only viewer whose interactions
    /// are accepted.
    pub owner_id: String,
    /// Current navigation position.
    pub nav: NavState,
    /// Bumped on every applied transition. Controls rendered for an older
    /// generation are rejected as stale.
    pub generation: u64,
    pub created_at: DateTime<Utc>,
    /// Updated on every applied transition; drives idle expiry.
    pub last_active: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh session at generation 0.
    pub fn new(message_id: impl Into<String>, owner_id: impl Into<String>, nav: NavState) -> Self {
        let now = Utc::now();
        Self {
            message_id: message_id.into(),
            owner_id: owner_id.into(),
            nav,
            generation: 0,
            created_at: now,
            last_active: now,
        }
    }

    /// The successor session after applying a transition: new navigation
    /// state, next generation, activity stamp refreshed.
    pub fn advanced(&self, nav: NavState) -> Self {
        Self {
            message_id: self.message_id.clone(),
            owner_id: self.owner_id.clone(),
            nav,
            generation: self.generation + 1,
            created_at: self.created_at,
            last_active: Utc::now(),
        }
    }

    /// [`is_expired`](Self::is_expired) against the current time.
    pub fn is_idle(&self, idle_timeout: std::time::Duration) -> bool {
        self.is_expired(Utc::now(), idle_timeout)
    }

    /// True once the idle timeout has elapsed since the last activity.
    pub fn is_expired(&self, now: DateTime<Utc>, idle_timeout: std::time::Duration) -> bool {
        match chrono::Duration::from_std(idle_timeout) {
            Ok(timeout) => now - self.last_active >= timeout,
            // An unrepresentably large timeout never expires.
            Err(_) => false,
        }
    }
}
