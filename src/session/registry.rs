//! Live sessions keyed by id
//!
//! Each session sits behind its own mutex, so two callers can never run
//! `apply_move` on the same game at once while different games proceed in
//! parallel.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rules::RuleSet;

use super::game::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<GameSession>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new game and return its id
    pub fn create(&self, rules: Arc<RuleSet>) -> SessionId {
        self.insert(GameSession::new(rules))
    }

    /// Register an existing session, e.g. one restored by replay
    pub fn insert(&self, session: GameSession) -> SessionId {
        let id = SessionId::new();
        self.sessions.write().insert(id, Arc::new(Mutex::new(session)));
        tracing::debug!(%id, "session registered");
        id
    }

    pub fn get(&self, id: SessionId) -> Option<Arc<Mutex<GameSession>>> {
        self.sessions.read().get(&id).cloned()
    }

    /// Run `f` with exclusive access to one session.
    /// Returns `None` if the id is unknown.
    pub fn with_session<R>(&self, id: SessionId, f: impl FnOnce(&mut GameSession) -> R) -> Option<R> {
        let session = self.get(id)?;
        let mut guard = session.lock();
        Some(f(&mut *guard))
    }

    /// Drop a session from the registry, handing it back to the caller
    pub fn remove(&self, id: SessionId) -> Option<Arc<Mutex<GameSession>>> {
        let removed = self.sessions.write().remove(&id);
        if removed.is_some() {
            tracing::debug!(%id, "session removed");
        }
        removed
    }

    /// Remove every finished game, returning their ids.
    ///
    /// Sessions are inspected with no registry lock held, so a caller
    /// inside `with_session` may still use the registry.
    pub fn prune_finished(&self) -> Vec<SessionId> {
        let snapshot: Vec<(SessionId, Arc<Mutex<GameSession>>)> = self
            .sessions
            .read()
            .iter()
            .map(|(id, s)| (*id, Arc::clone(s)))
            .collect();

        let finished: Vec<SessionId> = snapshot
            .into_iter()
            .filter(|(_, s)| s.lock().status().is_terminal())
            .map(|(id, _)| id)
            .collect();

        let mut sessions = self.sessions.write();
        for id in &finished {
            if sessions.remove(id).is_some() {
                tracing::debug!(%id, "finished session pruned");
            }
        }
        finished
    }

    pub fn ids(&self) -> Vec<SessionId> {
        self.sessions.read().keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
