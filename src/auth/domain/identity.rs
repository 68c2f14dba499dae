//! Identity values: email addresses, credentials, users, and sessions.

use super::AuthDomainError;
use crate::board::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized email address (trimmed, lower-cased).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::InvalidEmail`] unless the value has exactly
    /// one `@` with non-empty text on both sides and no whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, AuthDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();
        let is_valid = normalized
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            })
            && !normalized.chars().any(char::is_whitespace);
        if !is_valid {
            return Err(AuthDomainError::InvalidEmail(raw));
        }
        Ok(Self(normalized))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email and password pair submitted by the auth form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: Email,
    password: String,
}

impl Credentials {
    /// Creates validated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::InvalidEmail`] for a malformed address or
    /// [`AuthDomainError::EmptyPassword`] for a blank password.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AuthDomainError> {
        let email = Email::new(email)?;
        let password = password.into();
        if password.is_empty() {
            return Err(AuthDomainError::EmptyPassword);
        }
        Ok(Self { email, password })
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The authenticated user as far as the board is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: Email,
}

impl User {
    /// Creates a user.
    #[must_use]
    pub const fn new(id: UserId, email: Email) -> Self {
        Self { id, email }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user's email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }
}

/// Proof of an authenticated identity issued by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: User,
    issued_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for `user`.
    #[must_use]
    pub const fn new(user: User, issued_at: DateTime<Utc>) -> Self {
        Self { user, issued_at }
    }

    /// Returns the session user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Returns when the session was issued.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Acknowledgement of a sign-up that still awaits email confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    email: Email,
}

impl PendingConfirmation {
    /// Creates the acknowledgement for `email`.
    #[must_use]
    pub const fn new(email: Email) -> Self {
        Self { email }
    }

    /// Returns the address the confirmation link was sent to.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }
}
