//! Logout action.

use crate::auth::{domain::Route, ports::AuthService};
use tracing::error;

/// Signs out and returns the page to show next.
///
/// A failed sign-out is logged and leaves the user where they are.
pub async fn log_out<A>(auth: &A) -> Option<Route>
where
    A: AuthService + ?Sized,
{
    match auth.sign_out().await {
        Ok(()) => Some(Route::SignIn),
        Err(err) => {
            error!(error = %err, "error logging out");
            None
        }
    }
}
