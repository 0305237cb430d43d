//! The user display record carried in the session.

use serde::{Deserialize, Serialize};

/// Display record for a logged-in user.
///
/// Deliberately name-and-email only: the mock registration flow never
/// persists the password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl SessionUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Name shown in the navigation chrome: the display name, or the
    /// local part of the email when the name is empty.
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else {
            self.email.split('@').next().unwrap_or(&self.email)
        }
    }

    /// Avatar initial.
    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email_local_part() {
        let named = SessionUser::new("John Doe", "john@example.com");
        assert_eq!(named.display_name(), "John Doe");
        assert_eq!(named.initial(), 'J');

        let unnamed = SessionUser::new("", "jane@example.com");
        assert_eq!(unnamed.display_name(), "jane");
        assert_eq!(unnamed.initial(), 'J');
    }
}
