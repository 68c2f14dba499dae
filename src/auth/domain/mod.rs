//! Domain model for authentication and page access.

mod identity;
mod route;

pub use crate::board::domain::UserId;
pub use identity::{Credentials, Email, PendingConfirmation, Session, User};
pub use route::{PageAccess, Route};

use thiserror::Error;

/// Errors returned while constructing identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// The email address is malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}
