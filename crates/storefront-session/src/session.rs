//! The session record.

use crate::user::SessionUser;
use serde::{Deserialize, Serialize};

/// A logged-in session with a fixed expiry horizon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// The user display record.
    pub user: SessionUser,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp when the session expires.
    pub expires_at: i64,
}

impl Session {
    /// Default session duration: 7 days.
    pub const DEFAULT_DURATION_SECS: i64 = 7 * 24 * 60 * 60;

    /// Create a session for `user` expiring 7 days from now.
    pub fn new(user: SessionUser) -> Self {
        let now = current_timestamp();
        Self {
            user,
            created_at: now,
            expires_at: now + Self::DEFAULT_DURATION_SECS,
        }
    }

    /// Check if the session has passed its horizon.
    pub fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Check if the session is still valid.
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_valid_for_seven_days() {
        let session = Session::new(SessionUser::new("Test", "test@example.com"));
        assert!(session.is_valid());
        assert_eq!(
            session.expires_at - session.created_at,
            Session::DEFAULT_DURATION_SECS
        );
    }

    #[test]
    fn test_expired_session() {
        let mut session = Session::new(SessionUser::new("Test", "test@example.com"));
        session.expires_at = current_timestamp() - 1;
        assert!(session.is_expired());
    }
}
