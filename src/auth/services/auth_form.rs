//! Sign-in and sign-up form.

use crate::auth::{
    domain::{Credentials, Route},
    ports::AuthService,
};
use tracing::error;

/// Message shown after a successful sign-up.
pub const CONFIRMATION_NOTICE: &str = "Check your email for the confirmation link!";

/// Message shown when sign-in succeeded but no session can be read back.
pub const MISSING_SESSION_ERROR: &str = "Session not found after sign-in.";

/// Which flow the form drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Existing account.
    SignIn,
    /// New account.
    SignUp,
}

impl AuthMode {
    /// Returns the form heading and submit label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    /// Returns the route of the page hosting this mode.
    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::SignIn => Route::SignIn,
            Self::SignUp => Route::SignUp,
        }
    }

    /// Returns the route of the other mode's page.
    #[must_use]
    pub const fn alternate(self) -> Route {
        match self {
            Self::SignIn => Route::SignUp,
            Self::SignUp => Route::SignIn,
        }
    }
}

/// What the page should do after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFormOutcome {
    /// Navigate away.
    Redirect(Route),
    /// Sign-up accepted; the confirmation notice is set.
    ConfirmationPending,
    /// Submission failed; the inline error is set.
    Rejected,
}

/// Email/password form with an inline error slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
    error: Option<String>,
    notice: Option<String>,
}

impl AuthForm {
    /// Creates an empty form.
    #[must_use]
    pub const fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            email: String::new(),
            password: String::new(),
            error: None,
            notice: None,
        }
    }

    /// Returns the form mode.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Returns the inline error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the confirmation notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Submits the form against `auth`.
    ///
    /// Failures never escape: they are logged and shown inline, and the
    /// form stays usable for another attempt.
    pub async fn submit<A>(&mut self, auth: &A) -> AuthFormOutcome
    where
        A: AuthService + ?Sized,
    {
        self.error = None;
        self.notice = None;

        let credentials = match Credentials::new(self.email.clone(), self.password.clone()) {
            Ok(credentials) => credentials,
            Err(err) => return self.reject(err.to_string()),
        };

        match self.mode {
            AuthMode::SignUp => match auth.sign_up(&credentials).await {
                Ok(_) => {
                    self.notice = Some(CONFIRMATION_NOTICE.to_owned());
                    AuthFormOutcome::ConfirmationPending
                }
                Err(err) => self.reject(err.to_string()),
            },
            AuthMode::SignIn => {
                if let Err(err) = auth.sign_in_with_password(&credentials).await {
                    return self.reject(err.to_string());
                }
                match auth.get_session().await {
                    Ok(Some(_)) => AuthFormOutcome::Redirect(Route::Dashboard),
                    Ok(None) => self.reject(MISSING_SESSION_ERROR.to_owned()),
                    Err(err) => self.reject(err.to_string()),
                }
            }
        }
    }

    fn reject(&mut self, message: String) -> AuthFormOutcome {
        error!(mode = self.mode.title(), error = %message, "authentication failed");
        self.error = Some(message);
        AuthFormOutcome::Rejected
    }
}
