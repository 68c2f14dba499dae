//! HTML rendering of the pages through `minijinja` templates.

use crate::auth::{
    domain::{Route, User},
    services::AuthForm,
};
use crate::board::{
    domain::{BoardColumns, Task, TaskStatus},
    services::CreateTaskForm,
};
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Shown in place of the board until the first load completes.
pub const LOADING_TEXT: &str = "Loading...";

const DASHBOARD_TEMPLATE: &str = r#"<nav class="navbar">
  <span class="user-email">{{ email }}</span>
  <a class="logout" href="{{ logout_path|safe }}">Logout</a>
  <button class="add-task">Add To Do</button>
</nav>
{%- if dialog %}
<dialog class="create-task" open>
  <h2>Add New Task</h2>
  <input name="title" value="{{ dialog.title }}">
  <input name="date" type="date" value="{{ dialog.date }}">
  <input name="description" value="{{ dialog.description }}">
  <select name="status">
    {%- for option in status_options %}
    <option{% if option == dialog.status %} selected{% endif %}>{{ option }}</option>
    {%- endfor %}
  </select>
  {%- if dialog.error %}
  <p class="form-error">{{ dialog.error }}</p>
  {%- endif %}
  <button>Add Task</button>
</dialog>
{%- endif %}
<main class="board">
{%- for column in columns %}
  <section class="column" data-status="{{ column.title }}">
    <h2>{{ column.title }}</h2>
    {%- for card in column.cards %}
    <article class="task-card" data-task-id="{{ card.id }}">
      <h3>{{ card.title }}</h3>
      <p class="task-date">{{ card.date }}</p>
      <p class="task-description">{{ card.description }}</p>
      <select class="task-status">
        {%- for option in status_options %}
        <option{% if option == card.status %} selected{% endif %}>{{ option }}</option>
        {%- endfor %}
      </select>
    </article>
    {%- endfor %}
  </section>
{%- endfor %}
</main>
"#;

const AUTH_TEMPLATE: &str = r#"<form class="auth-form">
  <h1>{{ title }}</h1>
  <input name="email" type="email" placeholder="name@example.com" value="{{ email }}" required>
  <input name="password" type="password" required>
  {%- if error %}
  <p class="form-error">{{ error }}</p>
  {%- endif %}
  {%- if notice %}
  <p class="form-notice">{{ notice }}</p>
  {%- endif %}
  <button type="submit">{{ title }}</button>
  <a href="{{ alternate_path|safe }}">{{ alternate_label }}</a>
</form>
"#;

/// Errors raised while rendering a page.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Template compilation or evaluation failed.
    #[error(transparent)]
    Template(#[from] minijinja::Error),
}

/// One task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Long-form date.
    pub date: String,
    /// Task description.
    pub description: String,
    /// Status label on the dropdown.
    pub status: String,
}

impl CardView {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().to_owned(),
            date: task.date().long_form(),
            description: task.description().to_owned(),
            status: task.status_label().to_owned(),
        }
    }
}

/// One status column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    /// Column heading.
    pub title: &'static str,
    /// Cards in snapshot order.
    pub cards: Vec<CardView>,
}

/// The open create dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogView {
    /// Title input.
    pub title: String,
    /// Date input.
    pub date: String,
    /// Description input.
    pub description: String,
    /// Selected status.
    pub status: &'static str,
    /// Validation message.
    pub error: Option<String>,
}

/// Everything the dashboard template needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// Signed-in user's email.
    pub email: String,
    /// Target of the logout link.
    pub logout_path: &'static str,
    /// Status options in column order.
    pub status_options: Vec<&'static str>,
    /// The create dialog, when open.
    pub dialog: Option<DialogView>,
    /// The four columns in board order.
    pub columns: Vec<ColumnView>,
}

impl DashboardView {
    /// Builds the view for `user` from derived columns.
    #[must_use]
    pub fn build(user: &User, columns: &BoardColumns<'_>) -> Self {
        Self {
            email: user.email().to_string(),
            logout_path: Route::SignIn.path(),
            status_options: TaskStatus::ALL.iter().map(|s| s.as_str()).collect(),
            dialog: None,
            columns: columns
                .iter()
                .map(|column| ColumnView {
                    title: column.title(),
                    cards: column
                        .tasks()
                        .iter()
                        .map(|task| CardView::from_task(task))
                        .collect(),
                })
                .collect(),
        }
    }

    /// Adds the create dialog when `form` is open.
    #[must_use]
    pub fn with_dialog(mut self, form: &CreateTaskForm, error: Option<&str>) -> Self {
        self.dialog = form.is_open().then(|| {
            let draft = form.draft();
            DialogView {
                title: draft.title.clone(),
                date: draft.date.clone(),
                description: draft.description.clone(),
                status: draft.status.as_str(),
                error: error.map(str::to_owned),
            }
        });
        self
    }
}

#[derive(Serialize)]
struct AuthView<'a> {
    title: &'static str,
    email: &'a str,
    error: Option<&'a str>,
    notice: Option<&'a str>,
    alternate_path: &'static str,
    alternate_label: &'static str,
}

fn environment() -> Result<Environment<'static>, ViewError> {
    let mut env = Environment::new();
    env.add_template("dashboard.html", DASHBOARD_TEMPLATE)?;
    env.add_template("auth.html", AUTH_TEMPLATE)?;
    Ok(env)
}

/// Renders the dashboard.
///
/// # Errors
///
/// Returns [`ViewError::Template`] if rendering fails.
pub fn render_dashboard(view: &DashboardView) -> Result<String, ViewError> {
    let env = environment()?;
    Ok(env.get_template("dashboard.html")?.render(view)?)
}

/// Renders a sign-in or sign-up form.
///
/// # Errors
///
/// Returns [`ViewError::Template`] if rendering fails.
pub fn render_auth_form(form: &AuthForm) -> Result<String, ViewError> {
    let mode = form.mode();
    let alternate = mode.alternate();
    let view = AuthView {
        title: mode.title(),
        email: &form.email,
        error: form.error(),
        notice: form.notice(),
        alternate_path: alternate.path(),
        alternate_label: match alternate {
            Route::SignUp => "Sign up",
            _ => "Sign in",
        },
    };
    let env = environment()?;
    Ok(env.get_template("auth.html")?.render(view)?)
}
