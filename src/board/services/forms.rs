//! Task mutation forms: create dialog, edit dialog, and status select.
//!
//! Each form keeps a private draft that only leaves the form on confirm.
//! Closing or cancelling discards the draft.

use crate::board::domain::{
    NewTask, ProvisionalTask, Task, TaskDate, TaskDomainError, TaskFields, TaskId, TaskStatus,
    UserId,
};
use mockable::Clock;
use thiserror::Error;

/// Errors raised while confirming a form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// A field failed validation; the form stays open.
    #[error(transparent)]
    Invalid(#[from] TaskDomainError),

    /// The task carries a status label the form cannot offer.
    #[error("task {id} has status '{label}' outside the board columns")]
    UnknownStatus {
        /// Task identifier.
        id: TaskId,
        /// Stored label.
        label: String,
    },
}

/// Raw field values as typed into a dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Title input.
    pub title: String,
    /// Date input in `YYYY-MM-DD` form.
    pub date: String,
    /// Description input.
    pub description: String,
    /// Selected status.
    pub status: TaskStatus,
}

impl TaskDraft {
    /// Seeds a draft from existing task fields.
    #[must_use]
    pub fn from_fields(fields: &TaskFields) -> Self {
        Self {
            title: fields.title().to_owned(),
            date: fields.date().to_string(),
            description: fields.description().to_owned(),
            status: fields.status(),
        }
    }

    /// Validates the draft into task fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] for a blank title or unparsable date.
    pub fn to_fields(&self) -> Result<TaskFields, TaskDomainError> {
        let date = TaskDate::parse(&self.date)?;
        TaskFields::new(self.title.clone(), date, self.description.clone(), self.status)
    }
}

/// The "Add To Do" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskForm {
    open: bool,
    draft: TaskDraft,
}

impl CreateTaskForm {
    /// Creates a closed dialog with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog.
    pub const fn open(&mut self) {
        self.open = true;
    }

    /// Returns `true` while the dialog is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Returns the draft for editing.
    pub const fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    /// Closes the dialog and discards the draft.
    pub fn cancel(&mut self) {
        self.draft = TaskDraft::default();
        self.open = false;
    }

    /// Validates the draft and stamps it with `owner` and a provisional id.
    ///
    /// On success the draft is reset and the dialog closes, before the
    /// caller has submitted anything to the store.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] and keeps the dialog open with the
    /// draft intact when a field fails validation.
    pub fn confirm(
        &mut self,
        owner: UserId,
        clock: &impl Clock,
    ) -> Result<ProvisionalTask, FormError> {
        let fields = self.draft.to_fields()?;
        self.cancel();
        Ok(ProvisionalTask::new(
            TaskId::provisional(clock),
            NewTask::new(owner, fields),
        ))
    }
}

/// The edit dialog attached to one task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskForm {
    id: TaskId,
    source: TaskFields,
    open: bool,
    draft: TaskDraft,
}

impl EditTaskForm {
    /// Creates a closed edit dialog for `task`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownStatus`] for a task whose stored status is
    /// outside the board columns.
    pub fn for_task(task: &Task) -> Result<Self, FormError> {
        let source = task.fields().ok_or_else(|| FormError::UnknownStatus {
            id: task.id(),
            label: task.status_label().to_owned(),
        })?;
        let draft = TaskDraft::from_fields(&source);
        Ok(Self {
            id: task.id(),
            source,
            open: false,
            draft,
        })
    }

    /// Returns the edited task's identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.id
    }

    /// Opens the dialog seeded with the task's current values.
    pub fn open(&mut self) {
        self.draft = TaskDraft::from_fields(&self.source);
        self.open = true;
    }

    /// Returns `true` while the dialog is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Returns the draft for editing.
    pub const fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    /// Closes the dialog and discards the draft.
    pub fn cancel(&mut self) {
        self.draft = TaskDraft::from_fields(&self.source);
        self.open = false;
    }

    /// Validates the draft and closes the dialog.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] and keeps the dialog open when a field
    /// fails validation.
    pub fn confirm(&mut self) -> Result<(TaskId, TaskFields), FormError> {
        let fields = self.draft.to_fields()?;
        self.open = false;
        Ok((self.id, fields))
    }
}

/// The per-card status dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSelect {
    id: TaskId,
    label: String,
}

impl StatusSelect {
    /// Creates the dropdown for `task`, showing its stored label.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            id: task.id(),
            label: task.status_label().to_owned(),
        }
    }

    /// Returns the label on the dropdown trigger.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the offered statuses in column order.
    #[must_use]
    pub const fn options(&self) -> [TaskStatus; 4] {
        TaskStatus::ALL
    }

    /// Picks `status` for the task.
    #[must_use]
    pub const fn select(&self, status: TaskStatus) -> (TaskId, TaskStatus) {
        (self.id, status)
    }
}
