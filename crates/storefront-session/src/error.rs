//! Authentication errors.
//!
//! Every variant is recovered locally and rendered inline by the form
//! that triggered it; nothing here propagates past the view.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Credentials not in the allow-list.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Password shorter than the minimum.
    #[error("Password must be at least {0} characters")]
    WeakPassword(usize),

    /// Email already registered.
    #[error("An account with this email already exists")]
    EmailTaken(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            AuthError::WeakPassword(6).to_string(),
            "Password must be at least 6 characters"
        );
    }
}
