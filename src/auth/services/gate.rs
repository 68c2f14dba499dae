//! Session gate: decides, per page, whether to render or redirect.

use crate::auth::{
    domain::{PageAccess, Route, Session},
    ports::AuthService,
};
use std::sync::Arc;
use tracing::{debug, error};

/// Outcome of a session check for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the page for an anonymous visitor.
    Anonymous,
    /// Render the page for the session user.
    Authenticated(Session),
    /// Leave the page for another route without rendering.
    Redirect(Route),
}

/// Queries the auth service on page mount and applies the page's access
/// rule.
#[derive(Debug)]
pub struct SessionGate<A>
where
    A: AuthService,
{
    auth: Arc<A>,
}

impl<A> Clone for SessionGate<A>
where
    A: AuthService,
{
    fn clone(&self) -> Self {
        Self {
            auth: Arc::clone(&self.auth),
        }
    }
}

impl<A> SessionGate<A>
where
    A: AuthService,
{
    /// Creates a gate over the shared auth client.
    #[must_use]
    pub const fn new(auth: Arc<A>) -> Self {
        Self { auth }
    }

    /// Returns the auth client.
    #[must_use]
    pub const fn auth(&self) -> &Arc<A> {
        &self.auth
    }

    /// Checks the current session for `route`.
    ///
    /// A failed session query counts as signed out.
    pub async fn check(&self, route: Route) -> GateDecision {
        let session = match self.auth.get_session().await {
            Ok(session) => session,
            Err(err) => {
                error!(route = %route, error = %err, "error fetching session");
                None
            }
        };
        let decision = decide(route.access(), session);
        debug!(route = %route, ?decision, "session gate resolved");
        decision
    }
}

/// Pure access rule applied once the session is known.
#[must_use]
pub fn decide(access: PageAccess, session: Option<Session>) -> GateDecision {
    match (access, session) {
        (PageAccess::Redirector | PageAccess::Anonymous, Some(_)) => {
            GateDecision::Redirect(Route::Dashboard)
        }
        (PageAccess::Redirector | PageAccess::Authenticated, None) => {
            GateDecision::Redirect(Route::SignIn)
        }
        (PageAccess::Anonymous, None) => GateDecision::Anonymous,
        (PageAccess::Authenticated, Some(session)) => GateDecision::Authenticated(session),
    }
}
