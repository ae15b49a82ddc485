//! Persisted authentication session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single read/write point for login state. Route guards
//! read it before rendering admin pages and the gateway reads it before every
//! request; nothing else keeps a copy of the token.
//!
//! DESIGN
//! ======
//! The session is replaced as a whole record under a lock, so readers never
//! observe a half-applied login. Every transition is mirrored to a
//! `SessionStorage` backend under `STORAGE_KEY`, and `restore` reads it back on
//! start-up. Each transition also fires a reactive trigger, so guards that
//! called `track` re-run when a 401 or an explicit logout clears the session.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and dropped; the in-memory session is always
//! updated. A stored record that cannot be parsed, or that claims to be
//! authenticated without a token, restores as anonymous.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

use leptos::prelude::{ArcTrigger, Notify, Track};
use serde::{Deserialize, Serialize};

/// Storage key holding the serialized session.
pub const STORAGE_KEY: &str = "auth-storage";

const STORAGE_VERSION: u32 = 0;
const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("login requires a non-empty token")]
    EmptyToken,
}

/// Snapshot of who, if anyone, is logged in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Bearer credential without the `Bearer ` marker.
    pub token: Option<String>,
    /// Role tag decoded from the token at login.
    pub role: Option<String>,
    #[serde(rename = "isAuthenticated")]
    pub authenticated: bool,
}

impl Session {
    /// Token to present on outgoing requests, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }

    /// Role tag, only while authenticated.
    pub fn role(&self) -> Option<&str> {
        if self.authenticated { self.role.as_deref() } else { None }
    }

    fn is_consistent(&self) -> bool {
        !self.authenticated || self.token().is_some()
    }
}

/// Storage envelope; matches the layout earlier console builds left in `localStorage`.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    state: Session,
    #[serde(default)]
    version: u32,
}

/// Durable key/value backend for the session record.
pub trait SessionStorage: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a description of the failure when the value could not be stored.
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Strip an optional `Bearer ` marker and surrounding whitespace from a raw credential.
pub fn strip_bearer(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    trimmed.strip_prefix(BEARER_PREFIX).unwrap_or(trimmed).trim()
}

/// Shared handle to the session; clones observe the same state.
#[derive(Clone)]
pub struct SessionStore {
    current: Arc<RwLock<Session>>,
    storage: Arc<dyn SessionStorage>,
    changed: ArcTrigger,
}

impl SessionStore {
    /// Build a store initialized from `storage`, or anonymous when nothing usable is stored.
    pub fn restore(storage: Arc<dyn SessionStorage>) -> Self {
        let session = storage
            .read(STORAGE_KEY)
            .and_then(|raw| decode_persisted(&raw))
            .unwrap_or_default();
        if session.authenticated {
            log::debug!("session restored (role={})", session.role.as_deref().unwrap_or(""));
        }
        Self { current: Arc::new(RwLock::new(session)), storage, changed: ArcTrigger::new() }
    }

    /// Subscribe the running effect or memo to login/logout transitions.
    pub fn track(&self) {
        self.changed.track();
    }

    /// Current session, read without any network activity.
    pub fn snapshot(&self) -> Session {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .authenticated
    }

    /// Token for the next outgoing request.
    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token()
            .map(str::to_owned)
    }

    /// Record a successful credential exchange.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyToken` if `token` is empty after stripping
    /// the bearer marker; the session is left untouched.
    pub fn login(&self, token: &str, role: &str) -> Result<(), SessionError> {
        let token = strip_bearer(token);
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let next = Session {
            token: Some(token.to_owned()),
            role: Some(role.to_owned()),
            authenticated: true,
        };

        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            self.persist(&next);
            *current = next;
        }
        log::info!("session: logged in (role={role})");
        self.changed.notify();
        Ok(())
    }

    /// Clear the session. Returns `false` when it was already anonymous, in
    /// which case nothing is written.
    pub fn logout(&self) -> bool {
        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            if *current == Session::default() {
                return false;
            }
            let next = Session::default();
            self.persist(&next);
            *current = next;
        }
        log::info!("session: logged out");
        self.changed.notify();
        true
    }

    fn persist(&self, session: &Session) {
        let record = PersistedSession { state: session.clone(), version: STORAGE_VERSION };
        let raw = match serde_json::to_string(&record) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("session: encode failed: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.write(STORAGE_KEY, &raw) {
            log::warn!("session: persist failed: {e}");
        }
    }
}

fn decode_persisted(raw: &str) -> Option<Session> {
    let record = match serde_json::from_str::<PersistedSession>(raw) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("session: ignoring unreadable stored session: {e}");
            return None;
        }
    };
    let session = record.state;
    if !session.authenticated || !session.is_consistent() {
        return None;
    }
    Some(session)
}
