//! Application-wide context objects.
//!
//! The session context is the single source of truth for "is a user
//! logged in": login/logout mutate the backing store and the reactive
//! state together, and every subscribed view re-renders. No view polls.

use leptos::prelude::*;
use std::ops::Deref;
use std::sync::Arc;
use storefront_catalog::Catalog;
use storefront_session::{
    clear_session, load_session, persist_session, AuthError, Directory, GateOutcome,
    MemoryStore, Session, SessionGate, SessionUser,
};

/// Shared handle to the immutable catalog.
#[derive(Clone)]
pub struct CatalogContext(Arc<Catalog>);

impl CatalogContext {
    pub fn new(catalog: Catalog) -> Self {
        Self(Arc::new(catalog))
    }
}

impl Deref for CatalogContext {
    type Target = Catalog;

    fn deref(&self) -> &Catalog {
        &self.0
    }
}

/// Get the catalog from context.
pub fn use_catalog() -> CatalogContext {
    expect_context::<CatalogContext>()
}

/// Reactive view of the session store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Whether a live `auth` entry exists.
    pub authenticated: bool,
    /// Decoded user record, when one is available.
    pub user: Option<SessionUser>,
}

/// The session context provided at the app root.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<MemoryStore>,
    directory: Arc<Directory>,
    /// Reactive session state; views subscribe to this.
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let (authenticated, user) = load_session(&*store);
        Self {
            store,
            directory: Arc::new(Directory::demo()),
            state: RwSignal::new(SessionState {
                authenticated,
                user,
            }),
        }
    }

    /// Re-read the backing store into the reactive state.
    fn refresh(&self) {
        let (authenticated, user) = load_session(&*self.store);
        self.state.set(SessionState {
            authenticated,
            user,
        });
    }

    /// Attempt a login; on success the session is persisted with its
    /// 7-day horizon and subscribers are notified.
    pub fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let user = self.directory.login(email, password)?;
        persist_session(&*self.store, &Session::new(user.clone()));
        self.refresh();
        Ok(user)
    }

    /// Attempt a registration; same persistence path as login.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<SessionUser, AuthError> {
        let user = self.directory.register(name, email, password, confirm)?;
        persist_session(&*self.store, &Session::new(user.clone()));
        self.refresh();
        Ok(user)
    }

    /// Log out: clear the store and notify subscribers.
    pub fn logout(&self) {
        clear_session(&*self.store);
        self.refresh();
    }

    /// Consult the session gate for a protected path.
    pub fn gate(&self, requested_path: &str) -> GateOutcome {
        SessionGate::check(&*self.store, requested_path)
    }

    /// Demo credential hint for the login page.
    pub fn hint(&self) -> String {
        self.directory.hint()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the session context from context.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Light or dark appearance, persisted independently of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The theme toggle signal provided at the app root.
#[derive(Clone, Copy)]
pub struct ThemeContext(pub RwSignal<Theme>);

impl ThemeContext {
    pub fn new() -> Self {
        Self(RwSignal::new(Theme::default()))
    }

    pub fn toggle(&self) {
        self.0.update(|t| *t = t.toggled());
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the theme context from context.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_updates_state_and_logout_clears_it() {
        let session = SessionContext::new();
        assert!(!session.state.get_untracked().authenticated);

        let user = session.login("user@example.com", "password123").unwrap();
        let state = session.state.get_untracked();
        assert!(state.authenticated);
        assert_eq!(state.user, Some(user));

        session.logout();
        assert!(!session.state.get_untracked().authenticated);
    }

    #[test]
    fn test_failed_login_leaves_state_untouched() {
        let session = SessionContext::new();
        assert!(session.login("user@example.com", "nope").is_err());
        assert!(!session.state.get_untracked().authenticated);

        match session.gate("/products/3") {
            GateOutcome::RedirectToLogin { login_path } => {
                assert_eq!(login_path, "/login?callbackUrl=%2Fproducts%2F3");
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_gate_allows_after_register() {
        let session = SessionContext::new();
        session
            .register("Jane", "jane@example.com", "secret99", "secret99")
            .unwrap();
        assert!(matches!(
            session.gate("/products/3"),
            GateOutcome::Allowed(Some(_))
        ));
    }

    #[test]
    fn test_theme_toggle() {
        let theme = Theme::Light;
        assert_eq!(theme.toggled(), Theme::Dark);
        assert_eq!(theme.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
