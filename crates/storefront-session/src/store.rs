//! The typed session-store interface.
//!
//! Two logical entries back the whole auth surface: `auth`, whose
//! presence means "logged in", and `user`, the URL-encoded JSON display
//! record. Entries carry an expiry horizon; clearing writes an already
//! expired horizon rather than deleting, mirroring how browser cookies
//! are cleared.

use crate::cookie::{decode_user_cookie, encode_user_cookie};
use crate::session::{current_timestamp, Session};
use crate::user::SessionUser;
use std::collections::HashMap;
use std::sync::Mutex;

/// Key whose presence indicates a logged-in session.
pub const AUTH_KEY: &str = "auth";
/// Key holding the URL-encoded JSON user record.
pub const USER_KEY: &str = "user";

/// A persisted key/value store with per-entry expiry.
///
/// The storage medium is swappable: the app uses [`MemoryStore`], a real
/// deployment would back this with browser cookies or local storage.
pub trait SessionStore {
    /// Read a live (non-expired) entry.
    fn get(&self, key: &str) -> Option<String>;

    /// Write an entry with an expiry horizon (unix seconds).
    fn set(&self, key: &str, value: &str, expires_at: i64);

    /// Clear an entry by writing an already-expired horizon.
    fn clear(&self, key: &str);
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().expect("session store poisoned");
        entries
            .get(key)
            .filter(|e| e.expires_at > current_timestamp())
            .map(|e| e.value.clone())
    }

    fn set(&self, key: &str, value: &str, expires_at: i64) {
        let mut entries = self.entries.lock().expect("session store poisoned");
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
    }

    fn clear(&self, key: &str) {
        let mut entries = self.entries.lock().expect("session store poisoned");
        if let Some(entry) = entries.get_mut(key) {
            entry.expires_at = 0;
        }
    }
}

/// Write a session into the store: `auth` flag plus encoded user record,
/// both with the session's expiry horizon.
pub fn persist_session(store: &dyn SessionStore, session: &Session) {
    store.set(AUTH_KEY, "true", session.expires_at);
    store.set(USER_KEY, &encode_user_cookie(&session.user), session.expires_at);
    tracing::debug!(email = %session.user.email, "session persisted");
}

/// Read the session state back out of the store.
///
/// Returns `(authenticated, user)`. A present `auth` entry with a
/// malformed or missing `user` entry still counts as authenticated; the
/// user record just downgrades to `None`.
pub fn load_session(store: &dyn SessionStore) -> (bool, Option<SessionUser>) {
    let authenticated = store.get(AUTH_KEY).is_some();
    let user = store.get(USER_KEY).and_then(|v| decode_user_cookie(&v));
    (authenticated, user)
}

/// Clear both session entries.
pub fn clear_session(store: &dyn SessionStore) {
    store.clear(AUTH_KEY);
    store.clear(USER_KEY);
    tracing::debug!("session cleared");
}
