//! Store port: the only path from the board to the row-oriented data store.

use crate::board::domain::{NewTask, Task, TaskId, TaskPatch, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Row-filtered task persistence contract.
///
/// Every call is a single attempt against the store. Update and delete use
/// row-filter semantics: matching zero rows succeeds without effect.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns every task owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the store cannot be queried.
    async fn list_by_user(&self, user_id: &UserId) -> TaskStoreResult<Vec<Task>>;

    /// Inserts a new row; the store assigns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the insert is rejected.
    async fn insert(&self, task: &NewTask) -> TaskStoreResult<()>;

    /// Applies `patch` to the row with `id` owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the update is rejected.
    async fn update(&self, owner: &UserId, id: TaskId, patch: &TaskPatch) -> TaskStoreResult<()>;

    /// Deletes the row with `id` owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the delete is rejected.
    async fn delete(&self, owner: &UserId, id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The store could not be reached.
    #[error("task store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
