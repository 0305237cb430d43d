//! The fixed in-memory credential directory.
//!
//! Stands in for a real user service. Login compares against an
//! allow-list; registration accepts any non-duplicate email. There is no
//! hashing and no persistence: the directory is reset on every process
//! start, exactly like the mock it replaces.

use crate::error::AuthError;
use crate::user::SessionUser;

/// Fixed delay used by the UI to simulate network latency, in
/// milliseconds. There is no cancellation or queueing; the submit
/// control is disabled while a request is pending.
pub const SIMULATED_LATENCY_MS: u64 = 1500;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct Account {
    email: &'static str,
    password: &'static str,
    name: &'static str,
}

/// The credential allow-list.
#[derive(Debug, Clone)]
pub struct Directory {
    accounts: Vec<Account>,
}

impl Directory {
    /// The demo directory with its three fixed accounts.
    pub fn demo() -> Self {
        Self {
            accounts: vec![
                Account {
                    email: "user@example.com",
                    password: "password123",
                    name: "John Doe",
                },
                Account {
                    email: "admin@example.com",
                    password: "admin123",
                    name: "Admin User",
                },
                Account {
                    email: "test@example.com",
                    password: "test123",
                    name: "Test User",
                },
            ],
        }
    }

    /// The demo credentials surfaced as a login hint.
    pub fn hint(&self) -> String {
        self.accounts
            .first()
            .map(|a| format!("{} / {}", a.email, a.password))
            .unwrap_or_default()
    }

    /// Attempt a login against the allow-list.
    ///
    /// Exact match on both fields or nothing; no session is written here,
    /// the caller persists on success.
    pub fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        match self
            .accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
        {
            Some(account) => {
                tracing::info!(email, "login accepted");
                Ok(SessionUser::new(account.name, account.email))
            }
            None => {
                tracing::warn!(email, "login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Validate a registration request.
    ///
    /// Checks run in form order: password mismatch, password length,
    /// duplicate email. The password is validated but never stored.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<SessionUser, AuthError> {
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword(MIN_PASSWORD_LEN));
        }
        if self.accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::EmailTaken(email.to_string()));
        }

        tracing::info!(email, "registration accepted");
        Ok(SessionUser::new(name, email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{load_session, MemoryStore};

    #[test]
    fn test_login_with_known_account() {
        let directory = Directory::demo();
        let user = directory.login("user@example.com", "password123").unwrap();
        assert_eq!(user.name, "John Doe");
    }

    #[test]
    fn test_login_rejects_unknown_credentials_without_session_write() {
        let directory = Directory::demo();
        let store = MemoryStore::new();

        let err = directory
            .login("user@example.com", "wrong-password")
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid email or password");

        // Failure leaves the store untouched.
        let (authenticated, user) = load_session(&store);
        assert!(!authenticated);
        assert!(user.is_none());
    }

    #[test]
    fn test_login_requires_both_fields_to_match() {
        let directory = Directory::demo();
        assert!(directory.login("admin@example.com", "password123").is_err());
        assert!(directory.login("nobody@example.com", "admin123").is_err());
    }

    #[test]
    fn test_register_accepts_new_email() {
        let directory = Directory::demo();
        let user = directory
            .register("Jane", "jane@example.com", "secret99", "secret99")
            .unwrap();
        assert_eq!(user.email, "jane@example.com");
    }

    #[test]
    fn test_register_validation_order() {
        let directory = Directory::demo();

        // Mismatch wins over length.
        assert_eq!(
            directory.register("J", "jane@example.com", "abc", "xyz"),
            Err(AuthError::PasswordMismatch)
        );

        // Length wins over duplicates.
        assert_eq!(
            directory.register("J", "user@example.com", "abc", "abc"),
            Err(AuthError::WeakPassword(6))
        );

        // Duplicate email is last.
        assert_eq!(
            directory.register("J", "user@example.com", "abcdef", "abcdef"),
            Err(AuthError::EmailTaken("user@example.com".to_string()))
        );
    }
}
