//! Per-user chat sessions with a hard cap
//!
//! Each session owns a personality engine and the user's interaction log.
//! When the store is full, a new user evicts the least recently active one.

use std::collections::HashMap;
use tracing::info;

use crate::core::analytics::InteractionLog;
use crate::core::pdpa::anonymize;
use crate::core::personality::{PersonalityConfig, PersonalityEngine};
use crate::DEFAULT_MAX_SESSIONS;

#[derive(Debug)]
pub struct UserSession {
    pub personality: PersonalityEngine,
    pub interactions: InteractionLog,
    last_active: u64,
}

impl UserSession {
    fn new(config: PersonalityConfig) -> Self {
        Self {
            personality: PersonalityEngine::new(config),
            interactions: InteractionLog::new(),
            last_active: 0,
        }
    }
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<String, UserSession>,
    max_sessions: usize,
    // bumped on every touch; orders sessions by last activity
    clock: u64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    /// A cap of 0 is treated as 1
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            max_sessions: max_sessions.max(1),
            clock: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    pub fn get(&self, user_id: &str) -> Option<&UserSession> {
        self.sessions.get(user_id)
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.sessions.contains_key(user_id)
    }

    /// Session for `user_id`, created on first use and marked as most recent
    pub fn touch(&mut self, user_id: &str, config: &PersonalityConfig) -> &mut UserSession {
        self.clock += 1;
        let tick = self.clock;

        if !self.sessions.contains_key(user_id) && self.sessions.len() >= self.max_sessions {
            self.evict_idle();
        }

        let session = self
            .sessions
            .entry(user_id.to_string())
            .or_insert_with(|| UserSession::new(config.clone()));
        session.last_active = tick;
        session
    }

    pub fn remove(&mut self, user_id: &str) -> Option<UserSession> {
        self.sessions.remove(user_id)
    }

    /// Drop the least recently active session, returning its user id
    fn evict_idle(&mut self) -> Option<String> {
        let idle = self
            .sessions
            .iter()
            .min_by_key(|(_, session)| session.last_active)
            .map(|(user_id, _)| user_id.clone())?;
        self.sessions.remove(&idle);
        info!(user = %anonymize(&idle), cap = self.max_sessions, "evicted idle chat session");
        Some(idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_creates_once() {
        let mut store = SessionStore::new(4);
        let config = PersonalityConfig::default();
        store.touch("a", &config);
        store.touch("a", &config);
        assert_eq!(store.len(), 1);
        assert!(store.contains("a"));
    }

    #[test]
    fn test_cap_evicts_least_recent() {
        let mut store = SessionStore::new(2);
        let config = PersonalityConfig::default();
        store.touch("a", &config);
        store.touch("b", &config);
        // "a" becomes the most recent, so "b" goes
        store.touch("a", &config);
        store.touch("c", &config);

        assert_eq!(store.len(), 2);
        assert!(store.contains("a"));
        assert!(!store.contains("b"));
        assert!(store.contains("c"));
    }

    #[test]
    fn test_existing_user_never_evicts() {
        let mut store = SessionStore::new(1);
        let config = PersonalityConfig::default();
        store.touch("a", &config);
        store.touch("a", &config);
        assert!(store.contains("a"));
        store.touch("b", &config);
        assert_eq!(store.len(), 1);
        assert!(store.contains("b"));
    }

    #[test]
    fn test_zero_cap_holds_one() {
        let store = SessionStore::new(0);
        assert_eq!(store.max_sessions(), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = SessionStore::default();
        store.touch("a", &PersonalityConfig::default());
        assert!(store.remove("a").is_some());
        assert!(store.remove("a").is_none());
        assert!(store.is_empty());
    }
}
