//! Page composition: each page runs the session gate on mount and then
//! wires the board controller and forms together.

use super::{
    client::BackendClient,
    view::{DashboardView, LOADING_TEXT, ViewError, render_auth_form, render_dashboard},
};
use crate::auth::{
    domain::{Route, User},
    ports::AuthService,
    services::{AuthForm, AuthFormOutcome, AuthMode, GateDecision, log_out},
};
use crate::board::{
    domain::{BoardColumns, TaskId, TaskStatus},
    ports::TaskStore,
    services::{
        BoardController, BoardResult, CreateTaskForm, EditTaskForm, FormError, StatusSelect,
    },
};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Result of mounting a gated page.
#[derive(Debug)]
pub enum Mount<P> {
    /// The page may render.
    Ready(P),
    /// The visitor was sent elsewhere; nothing was rendered.
    Redirect(Route),
}

impl<P> Mount<P> {
    /// Returns the redirect target, if any.
    #[must_use]
    pub const fn redirect(&self) -> Option<Route> {
        match self {
            Self::Ready(_) => None,
            Self::Redirect(route) => Some(*route),
        }
    }
}

/// Consumes the outcome of a board mutation. Failures were logged by the
/// controller and only show as the absence of the change.
fn settle(result: BoardResult<()>) {
    if let Err(err) = result {
        debug!(error = %err, "board change not applied");
    }
}

/// Resolves the landing page `/`, which only ever redirects.
pub async fn resolve_landing<A, S>(client: &BackendClient<A, S>) -> Route
where
    A: AuthService,
    S: TaskStore,
{
    match client.gate().check(Route::Home).await {
        GateDecision::Redirect(route) => route,
        GateDecision::Anonymous => Route::SignIn,
        GateDecision::Authenticated(_) => Route::Dashboard,
    }
}

/// Resolves the page a request for `path` lands on once the session gate
/// has run. Unknown paths yield `None`.
pub async fn navigate<A, S>(client: &BackendClient<A, S>, path: &str) -> Option<Route>
where
    A: AuthService,
    S: TaskStore,
{
    let Some(route) = Route::from_path(path) else {
        debug!(path, "no page for path");
        return None;
    };
    match client.gate().check(route).await {
        GateDecision::Redirect(target) => Some(target),
        GateDecision::Anonymous | GateDecision::Authenticated(_) => Some(route),
    }
}

/// The board page for a signed-in user.
#[derive(Debug)]
pub struct DashboardPage<A, S, C>
where
    A: AuthService,
    S: TaskStore,
    C: Clock,
{
    client: BackendClient<A, S>,
    clock: Arc<C>,
    user: User,
    board: BoardController<S>,
    create_form: CreateTaskForm,
    create_error: Option<String>,
}

impl<A, S, C> DashboardPage<A, S, C>
where
    A: AuthService,
    S: TaskStore,
    C: Clock,
{
    /// Gates `/dashboard`, then performs the initial task load.
    ///
    /// A failed initial load leaves an empty board; it is already logged.
    pub async fn mount(client: BackendClient<A, S>, clock: Arc<C>) -> Mount<Self> {
        let session = match client.gate().check(Route::Dashboard).await {
            GateDecision::Authenticated(session) => session,
            GateDecision::Redirect(route) => return Mount::Redirect(route),
            GateDecision::Anonymous => return Mount::Redirect(Route::SignIn),
        };
        let user = session.user().clone();
        let board = BoardController::new(Arc::clone(client.store()), user.id());
        if board.load().await.is_err() {
            debug!(owner = %user.id(), "dashboard mounted without tasks");
        }
        Mount::Ready(Self {
            client,
            clock,
            user,
            board,
            create_form: CreateTaskForm::new(),
            create_error: None,
        })
    }

    /// Returns the signed-in user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Returns the board controller.
    #[must_use]
    pub const fn board(&self) -> &BoardController<S> {
        &self.board
    }

    /// Returns the create dialog.
    #[must_use]
    pub const fn create_form(&self) -> &CreateTaskForm {
        &self.create_form
    }

    /// Returns the create dialog for input.
    pub const fn create_form_mut(&mut self) -> &mut CreateTaskForm {
        &mut self.create_form
    }

    /// Returns the validation message of the create dialog, if any.
    #[must_use]
    pub fn create_error(&self) -> Option<&str> {
        self.create_error.as_deref()
    }

    /// Confirms the create dialog and submits the task.
    ///
    /// The dialog closes as soon as the draft validates; the outcome of the
    /// store call is only visible through the reloaded board.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when the draft is invalid; the dialog stays
    /// open.
    pub async fn add_task(&mut self) -> Result<(), FormError> {
        let task = match self.create_form.confirm(self.user.id(), &*self.clock) {
            Ok(task) => task,
            Err(err) => {
                self.create_error = Some(err.to_string());
                return Err(err);
            }
        };
        self.create_error = None;
        settle(self.board.create(&task).await);
        Ok(())
    }

    /// Confirms an edit dialog and submits the change.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when the draft is invalid; the dialog stays
    /// open.
    pub async fn save_edit(&self, form: &mut EditTaskForm) -> Result<(), FormError> {
        let (id, fields) = form.confirm()?;
        settle(self.board.update(id, fields).await);
        Ok(())
    }

    /// Applies a status picked from a card's dropdown.
    pub async fn select_status(&self, select: &StatusSelect, status: TaskStatus) {
        let (id, status) = select.select(status);
        settle(self.board.change_status(id, status).await);
    }

    /// Deletes a task from its card.
    pub async fn delete_task(&self, id: TaskId) {
        settle(self.board.delete(id).await);
    }

    /// Signs out; returns the page to navigate to on success.
    pub async fn log_out(&self) -> Option<Route> {
        log_out(self.client.auth().as_ref()).await
    }

    /// Renders the page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] if the template fails.
    pub fn render(&self) -> Result<String, ViewError> {
        if self.board.is_loading() {
            return Ok(LOADING_TEXT.to_owned());
        }
        let view = self
            .board
            .with_columns(|columns| DashboardView::build(&self.user, columns))
            .unwrap_or_else(|_| DashboardView::build(&self.user, &BoardColumns::partition(&[])));
        render_dashboard(&view.with_dialog(&self.create_form, self.create_error.as_deref()))
    }
}

/// The sign-in or sign-up page.
#[derive(Debug)]
pub struct AuthPage<A, S>
where
    A: AuthService,
    S: TaskStore,
{
    client: BackendClient<A, S>,
    form: AuthForm,
}

impl<A, S> AuthPage<A, S>
where
    A: AuthService,
    S: TaskStore,
{
    /// Gates the page; signed-in visitors are sent to the dashboard.
    pub async fn mount(client: BackendClient<A, S>, mode: AuthMode) -> Mount<Self> {
        match client.gate().check(mode.route()).await {
            GateDecision::Anonymous => Mount::Ready(Self {
                client,
                form: AuthForm::new(mode),
            }),
            GateDecision::Redirect(route) => Mount::Redirect(route),
            GateDecision::Authenticated(_) => Mount::Redirect(Route::Dashboard),
        }
    }

    /// Returns the form.
    #[must_use]
    pub const fn form(&self) -> &AuthForm {
        &self.form
    }

    /// Returns the form for input.
    pub const fn form_mut(&mut self) -> &mut AuthForm {
        &mut self.form
    }

    /// Submits the form.
    pub async fn submit(&mut self) -> AuthFormOutcome {
        self.form.submit(self.client.auth().as_ref()).await
    }

    /// Renders the page.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] if the template fails.
    pub fn render(&self) -> Result<String, ViewError> {
        render_auth_form(&self.form)
    }
}
