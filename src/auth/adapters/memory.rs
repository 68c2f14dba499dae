//! In-memory account service for tests and local runs.

use async_trait::async_trait;
use mockable::Clock;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::{Credentials, Email, PendingConfirmation, Session, User, UserId},
    ports::{AuthError, AuthResult, AuthService},
};

/// Thread-safe in-memory account service holding a single client session.
pub struct InMemoryAuthService<C>
where
    C: Clock,
{
    state: Arc<RwLock<AuthState>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryAuthService<C>
where
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> fmt::Debug for InMemoryAuthService<C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryAuthService")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct AuthState {
    accounts: HashMap<Email, Account>,
    session: Option<Session>,
}

#[derive(Debug)]
struct Account {
    id: UserId,
    password_digest: Vec<u8>,
    confirmed: bool,
}

impl<C> InMemoryAuthService<C>
where
    C: Clock,
{
    /// Creates a service with no accounts.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(AuthState::default())),
            clock,
        }
    }

    /// Marks the account for `email` as confirmed, as following the emailed
    /// link would. Returns `false` for an unknown address.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unavailable`] if the state lock is poisoned.
    pub fn confirm_email(&self, email: &Email) -> AuthResult<bool> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.accounts.get_mut(email).is_some_and(|account| {
            account.confirmed = true;
            true
        }))
    }

    /// Drops the current session without the client asking, as token expiry
    /// or revocation on the server would.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unavailable`] if the state lock is poisoned.
    pub fn invalidate_session(&self) -> AuthResult<()> {
        self.state.write().map_err(poisoned)?.session = None;
        Ok(())
    }
}

fn poisoned(err: impl fmt::Display) -> AuthError {
    AuthError::Unavailable(err.to_string())
}

/// Digest salted with the address so equal passwords differ per account.
fn password_digest(credentials: &Credentials) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(credentials.email().as_str().as_bytes());
    hasher.update([0_u8]);
    hasher.update(credentials.password().as_bytes());
    hasher.finalize().to_vec()
}

#[async_trait]
impl<C> AuthService for InMemoryAuthService<C>
where
    C: Clock + Send + Sync,
{
    async fn sign_up(&self, credentials: &Credentials) -> AuthResult<PendingConfirmation> {
        let mut state = self.state.write().map_err(poisoned)?;
        let email = credentials.email().clone();
        if state.accounts.contains_key(&email) {
            return Err(AuthError::AlreadyRegistered(email));
        }
        state.accounts.insert(
            email.clone(),
            Account {
                id: UserId::new(),
                password_digest: password_digest(credentials),
                confirmed: false,
            },
        );
        Ok(PendingConfirmation::new(email))
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> AuthResult<Session> {
        let mut state = self.state.write().map_err(poisoned)?;
        let account = state
            .accounts
            .get(credentials.email())
            .filter(|account| account.password_digest == password_digest(credentials))
            .ok_or(AuthError::InvalidCredentials)?;
        if !account.confirmed {
            return Err(AuthError::EmailNotConfirmed);
        }
        let user = User::new(account.id, credentials.email().clone());
        let session = Session::new(user, self.clock.utc());
        state.session = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.state.write().map_err(poisoned)?.session = None;
        Ok(())
    }

    async fn get_session(&self) -> AuthResult<Option<Session>> {
        Ok(self.state.read().map_err(poisoned)?.session.clone())
    }
}
