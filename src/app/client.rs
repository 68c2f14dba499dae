//! The configured backend client shared by every page.

use crate::auth::{ports::AuthService, services::SessionGate};
use crate::board::ports::TaskStore;
use std::sync::Arc;

/// Handles onto the hosted auth service and task store.
///
/// Built once and passed to each page; cloning shares the same handles.
#[derive(Debug)]
pub struct BackendClient<A, S>
where
    A: AuthService,
    S: TaskStore,
{
    auth: Arc<A>,
    store: Arc<S>,
}

impl<A, S> Clone for BackendClient<A, S>
where
    A: AuthService,
    S: TaskStore,
{
    fn clone(&self) -> Self {
        Self {
            auth: Arc::clone(&self.auth),
            store: Arc::clone(&self.store),
        }
    }
}

impl<A, S> BackendClient<A, S>
where
    A: AuthService,
    S: TaskStore,
{
    /// Bundles the two service handles.
    #[must_use]
    pub const fn new(auth: Arc<A>, store: Arc<S>) -> Self {
        Self { auth, store }
    }

    /// Returns the auth service handle.
    #[must_use]
    pub const fn auth(&self) -> &Arc<A> {
        &self.auth
    }

    /// Returns the task store handle.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Returns a session gate over the auth handle.
    #[must_use]
    pub fn gate(&self) -> SessionGate<A> {
        SessionGate::new(Arc::clone(&self.auth))
    }
}
