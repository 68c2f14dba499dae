//! Task entity and the payloads used to create and change tasks.

use super::{TaskDate, TaskDomainError, TaskId, TaskStatus, UserId};
use serde::{Deserialize, Serialize};

/// A task row as held by the store.
///
/// The status is kept as the stored label: rows edited outside the board
/// may carry a label outside [`TaskStatus::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: String,
    date: TaskDate,
    user_id: UserId,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status label, unvalidated.
    pub status: String,
    /// Persisted calendar date.
    pub date: TaskDate,
    /// Owning user.
    pub user_id: UserId,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            date: data.date,
            user_id: data.user_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the raw status label as stored.
    #[must_use]
    pub fn status_label(&self) -> &str {
        &self.status
    }

    /// Returns the board status, or `None` when the stored label is not
    /// one of the four columns.
    #[must_use]
    pub fn status(&self) -> Option<TaskStatus> {
        TaskStatus::try_from(self.status.as_str()).ok()
    }

    /// Returns the task date.
    #[must_use]
    pub const fn date(&self) -> TaskDate {
        self.date
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the editable fields, or `None` for an unknown status label.
    #[must_use]
    pub fn fields(&self) -> Option<TaskFields> {
        self.status().map(|status| TaskFields {
            title: self.title.clone(),
            date: self.date,
            description: self.description.clone(),
            status,
        })
    }

    /// Returns `true` when this row carries exactly the submitted content.
    /// Identifiers are not compared.
    #[must_use]
    pub fn matches_submission(&self, submitted: &NewTask) -> bool {
        self.user_id == submitted.user_id
            && self.title == submitted.fields.title
            && self.description == submitted.fields.description
            && self.date == submitted.fields.date
            && self.status == submitted.fields.status.as_str()
    }
}

/// User-editable content of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    title: String,
    date: TaskDate,
    description: String,
    status: TaskStatus,
}

impl TaskFields {
    /// Creates validated task fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is blank.
    pub fn new(
        title: impl Into<String>,
        date: TaskDate,
        description: impl Into<String>,
        status: TaskStatus,
    ) -> Result<Self, TaskDomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            title,
            date,
            description: description.into(),
            status,
        })
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the date.
    #[must_use]
    pub const fn date(&self) -> TaskDate {
        self.date
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Insert payload: a task without any identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    user_id: UserId,
    fields: TaskFields,
}

impl NewTask {
    /// Creates an insert payload owned by `user_id`.
    #[must_use]
    pub const fn new(user_id: UserId, fields: TaskFields) -> Self {
        Self { user_id, fields }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the task content.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }
}

/// A new task stamped with a client-minted identifier.
///
/// Only [`ProvisionalTask::new_task`] is submitted to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionalTask {
    id: TaskId,
    task: NewTask,
}

impl ProvisionalTask {
    /// Pairs an insert payload with its provisional identifier.
    #[must_use]
    pub const fn new(id: TaskId, task: NewTask) -> Self {
        Self { id, task }
    }

    /// Returns the provisional identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.task.user_id
    }

    /// Returns the insert payload.
    #[must_use]
    pub const fn new_task(&self) -> &NewTask {
        &self.task
    }
}

/// Partial update of a task row. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement date.
    pub date: Option<TaskDate>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Patch touching only the status.
    #[must_use]
    pub const fn status_only(status: TaskStatus) -> Self {
        Self {
            title: None,
            date: None,
            description: None,
            status: Some(status),
        }
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.status.is_none()
    }
}

impl From<TaskFields> for TaskPatch {
    fn from(fields: TaskFields) -> Self {
        Self {
            title: Some(fields.title),
            date: Some(fields.date),
            description: Some(fields.description),
            status: Some(fields.status),
        }
    }
}
