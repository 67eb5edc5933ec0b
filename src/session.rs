//! Per-session profile storage
//!
//! One [`Profile`] per session id, created on first access and discarded on
//! explicit teardown. The store is meant to be owned by the embedding
//! service and handed to whatever layer applies profile updates — never kept
//! as a process-wide global.
//!
//! Not internally synchronized: the model is at most one writer per session
//! at a time. A concurrent host must wrap entries in its own lock.

use chrono::{DateTime, Local};
use indexmap::IndexMap;

use crate::profile::Profile;

/// A live session and its profile
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub profile: Profile,
    pub created_at: DateTime<Local>,
}

/// In-memory session-id → profile map, insertion-ordered
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: IndexMap<String, SessionEntry>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the profile for a session, creating it on first access
    pub fn get_or_create(&mut self, id: &str) -> &mut Profile {
        let entry = self
            .sessions
            .entry(id.to_string())
            .or_insert_with(|| SessionEntry {
                profile: Profile::new(),
                created_at: Local::now(),
            });
        &mut entry.profile
    }

    /// Tear down a session, dropping its profile
    ///
    /// Returns false if the session was never created (or already ended).
    pub fn end(&mut self, id: &str) -> bool {
        self.sessions.shift_remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Iterate live sessions in creation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SessionEntry)> {
        self.sessions.iter().map(|(id, entry)| (id.as_str(), entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_returns_same_profile() {
        let mut store = SessionStore::new();
        store.get_or_create("alice").add_destination("Kyoto");
        store.get_or_create("alice").add_destination("Kyoto");

        assert_eq!(store.len(), 1);
        let profile = store.get_or_create("alice");
        assert_eq!(profile.preferences.destinations.len(), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut store = SessionStore::new();
        store.get_or_create("alice").set_budget(10_000);
        assert_eq!(store.get_or_create("bob").preferences.budget, None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_end_drops_profile() {
        let mut store = SessionStore::new();
        store.get_or_create("alice").set_budget(10_000);

        assert!(store.end("alice"));
        assert!(!store.end("alice"));

        // a new session under the same id starts fresh
        assert_eq!(store.get_or_create("alice").preferences.budget, None);
    }

    #[test]
    fn test_iter_keeps_creation_order() {
        let mut store = SessionStore::new();
        store.get_or_create("b");
        store.get_or_create("a");

        let ids: Vec<&str> = store.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
