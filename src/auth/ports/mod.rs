//! Port contract for the hosted account service.

use crate::auth::domain::{Credentials, Email, PendingConfirmation, Session};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for auth service operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Account and session management offered by the hosted backend.
///
/// The service keeps the current session itself; callers only ever query
/// it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Registers an account. No session is established until the email
    /// address has been confirmed and the user signs in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AlreadyRegistered`] for a known address.
    async fn sign_up(&self, credentials: &Credentials) -> AuthResult<PendingConfirmation>;

    /// Signs in and establishes a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] or
    /// [`AuthError::EmailNotConfirmed`].
    async fn sign_in_with_password(&self, credentials: &Credentials) -> AuthResult<Session>;

    /// Ends the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unavailable`] when the service cannot be reached.
    async fn sign_out(&self) -> AuthResult<()>;

    /// Returns the current session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unavailable`] when the service cannot be reached.
    async fn get_session(&self) -> AuthResult<Option<Session>>;
}

/// Errors returned by auth service implementations.
///
/// The display text is shown verbatim on the auth form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown address or wrong password.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// The account exists but the confirmation link was not followed.
    #[error("Email not confirmed")]
    EmailNotConfirmed,

    /// Sign-up for an address that already has an account.
    #[error("User already registered: {0}")]
    AlreadyRegistered(Email),

    /// The service could not be reached.
    #[error("Auth service unavailable: {0}")]
    Unavailable(String),
}
