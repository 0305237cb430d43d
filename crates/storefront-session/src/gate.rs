//! The session gate consulted before rendering protected views.

use crate::store::{load_session, SessionStore};
use crate::user::SessionUser;

/// Outcome of a gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Logged in; the decoded user record when one is available.
    Allowed(Option<SessionUser>),
    /// Not logged in; redirect to the login entry point, carrying the
    /// originally requested path so navigation can resume afterwards.
    RedirectToLogin {
        /// Full login path including the callback parameter.
        login_path: String,
    },
}

/// Capability check for protected views.
pub struct SessionGate;

impl SessionGate {
    /// Check the store and decide whether `requested_path` may render.
    pub fn check(store: &dyn SessionStore, requested_path: &str) -> GateOutcome {
        let (authenticated, user) = load_session(store);
        if authenticated {
            GateOutcome::Allowed(user)
        } else {
            GateOutcome::RedirectToLogin {
                login_path: login_redirect_path(requested_path),
            }
        }
    }
}

/// Build the login entry-point path carrying a callback target.
pub fn login_redirect_path(target: &str) -> String {
    format!("/login?callbackUrl={}", encode_path(target))
}

fn encode_path(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::store::{persist_session, MemoryStore};

    #[test]
    fn test_gate_redirects_with_callback() {
        let store = MemoryStore::new();
        let outcome = SessionGate::check(&store, "/products/7");
        assert_eq!(
            outcome,
            GateOutcome::RedirectToLogin {
                login_path: "/login?callbackUrl=%2Fproducts%2F7".to_string(),
            }
        );
    }

    #[test]
    fn test_gate_allows_authenticated_session() {
        let store = MemoryStore::new();
        let user = SessionUser::new("John Doe", "user@example.com");
        persist_session(&store, &Session::new(user.clone()));

        let outcome = SessionGate::check(&store, "/products/7");
        assert_eq!(outcome, GateOutcome::Allowed(Some(user)));
    }

    #[test]
    fn test_gate_allows_auth_flag_without_user_record() {
        use crate::session::current_timestamp;
        use crate::store::SessionStore;

        let store = MemoryStore::new();
        store.set("auth", "true", current_timestamp() + 60);

        // Authenticated, but no display record available.
        let outcome = SessionGate::check(&store, "/products/7");
        assert_eq!(outcome, GateOutcome::Allowed(None));
    }

    #[test]
    fn test_login_redirect_path_encoding() {
        assert_eq!(
            login_redirect_path("/products/12"),
            "/login?callbackUrl=%2Fproducts%2F12"
        );
    }
}
