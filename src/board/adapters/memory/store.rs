//! In-memory task store for tests and local runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskPatch, UserId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store assigning sequential identifiers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    rows: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a row directly, bypassing the board, as an edit made in the
    /// hosted store's console would.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] if the state lock is poisoned.
    pub fn put_row(&self, data: PersistedTaskData) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_id = state.last_id.max(data.id.value());
        state.rows.insert(data.id, Task::from_persisted(data));
        Ok(())
    }

    /// Returns the number of rows across all users.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] if the state lock is poisoned.
    pub fn row_count(&self) -> TaskStoreResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.rows.len())
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

fn apply_patch(task: &Task, patch: &TaskPatch) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: task.id(),
        title: patch
            .title
            .clone()
            .unwrap_or_else(|| task.title().to_owned()),
        description: patch
            .description
            .clone()
            .unwrap_or_else(|| task.description().to_owned()),
        status: patch
            .status
            .map_or_else(|| task.status_label().to_owned(), |s| s.as_str().to_owned()),
        date: patch.date.unwrap_or_else(|| task.date()),
        user_id: task.user_id(),
    })
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_by_user(&self, user_id: &UserId) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .rows
            .values()
            .filter(|task| task.user_id() == *user_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, task: &NewTask) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_id += 1;
        let id = TaskId::new(state.last_id);
        let fields = task.fields();
        let row = Task::from_persisted(PersistedTaskData {
            id,
            title: fields.title().to_owned(),
            description: fields.description().to_owned(),
            status: fields.status().as_str().to_owned(),
            date: fields.date(),
            user_id: task.user_id(),
        });
        state.rows.insert(id, row);
        Ok(())
    }

    async fn update(&self, owner: &UserId, id: TaskId, patch: &TaskPatch) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let updated = state
            .rows
            .get(&id)
            .filter(|task| task.user_id() == *owner)
            .map(|task| apply_patch(task, patch));
        if let Some(task) = updated {
            state.rows.insert(id, task);
        }
        Ok(())
    }

    async fn delete(&self, owner: &UserId, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let owned = state
            .rows
            .get(&id)
            .is_some_and(|task| task.user_id() == *owner);
        if owned {
            state.rows.remove(&id);
        }
        Ok(())
    }
}
