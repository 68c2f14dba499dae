//! Board state controller: owns the task snapshot for one mounted board.
//!
//! Every successful mutation is followed by a full reload from the store;
//! the snapshot is never patched locally. Each load is tagged with a
//! generation so that a reply overtaken by a newer one is discarded.

use crate::board::{
    domain::{
        BoardColumns, ProvisionalTask, Task, TaskFields, TaskId, TaskPatch, TaskStatus, UserId,
        hidden_tasks,
    },
    ports::{TaskStore, TaskStoreError},
};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Errors surfaced by board controller operations.
///
/// They are logged before being returned; callers may drop them.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The store rejected the call.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// A new task was stamped for a different user than the board owner.
    #[error("task drafted for user {submitted} cannot be created on the board of {owner}")]
    OwnerMismatch {
        /// Owner of the board.
        owner: UserId,
        /// User stamped on the draft.
        submitted: UserId,
    },

    /// The snapshot lock was poisoned by a panicking holder.
    #[error("board state lock poisoned")]
    StatePoisoned,
}

/// Result type for board controller operations.
pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug)]
struct BoardState {
    tasks: Vec<Task>,
    is_loading: bool,
    issued_generation: u64,
    applied_generation: u64,
}

/// Holds the task snapshot of one user's board.
///
/// Cloning yields another handle onto the same snapshot.
#[derive(Debug)]
pub struct BoardController<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    owner: UserId,
    state: Arc<RwLock<BoardState>>,
}

impl<S> Clone for BoardController<S>
where
    S: TaskStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            owner: self.owner,
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> BoardController<S>
where
    S: TaskStore,
{
    /// Creates an empty board for `owner`, flagged as loading until the
    /// first [`BoardController::load`] completes.
    #[must_use]
    pub fn new(store: Arc<S>, owner: UserId) -> Self {
        Self {
            store,
            owner,
            state: Arc::new(RwLock::new(BoardState {
                tasks: Vec::new(),
                is_loading: true,
                issued_generation: 0,
                applied_generation: 0,
            })),
        }
    }

    /// Returns the owner of the board.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns `true` until the first load has completed.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().is_ok_and(|state| state.is_loading)
    }

    /// Returns a copy of the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] if the state lock is poisoned.
    pub fn tasks(&self) -> BoardResult<Vec<Task>> {
        Ok(self.read()?.tasks.clone())
    }

    /// Runs `f` over the columns derived from the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] if the state lock is poisoned.
    pub fn with_columns<T>(&self, f: impl FnOnce(&BoardColumns<'_>) -> T) -> BoardResult<T> {
        let state = self.read()?;
        Ok(f(&BoardColumns::partition(&state.tasks)))
    }

    /// Replaces the snapshot with every task the store holds for the owner.
    ///
    /// On failure the previous snapshot is kept. A reply is dropped once a
    /// load issued later has replied, whether that reply succeeded or failed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the store query fails.
    pub async fn load(&self) -> BoardResult<()> {
        let generation = {
            let mut state = self.write()?;
            state.issued_generation += 1;
            state.issued_generation
        };
        debug!(owner = %self.owner, generation, "loading tasks");

        let reply = self.store.list_by_user(&self.owner).await;

        let mut state = self.write()?;
        state.is_loading = false;
        let tasks = match reply {
            Ok(tasks) => tasks,
            Err(err) => {
                error!(owner = %self.owner, error = %err, "failed to load tasks");
                state.applied_generation = state.applied_generation.max(generation);
                return Err(BoardError::from(err));
            }
        };

        if generation <= state.applied_generation {
            warn!(
                owner = %self.owner,
                generation,
                applied = state.applied_generation,
                "discarding stale task list reply"
            );
            return Ok(());
        }

        for task in hidden_tasks(&tasks) {
            warn!(
                task_id = %task.id(),
                status = task.status_label(),
                "task has a status outside the board columns and is not shown"
            );
        }
        state.tasks = tasks;
        state.applied_generation = generation;
        Ok(())
    }

    /// Submits a new task, then reloads.
    ///
    /// The provisional identifier is not sent; the reloaded snapshot carries
    /// the store-assigned one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OwnerMismatch`] without calling the store when
    /// the draft belongs to another user, or [`BoardError::Store`] when the
    /// insert or reload fails.
    pub async fn create(&self, task: &ProvisionalTask) -> BoardResult<()> {
        if task.user_id() != self.owner {
            let err = BoardError::OwnerMismatch {
                owner: self.owner,
                submitted: task.user_id(),
            };
            error!(error = %err, "refusing to create task");
            return Err(err);
        }
        if let Err(err) = self.store.insert(task.new_task()).await {
            error!(
                owner = %self.owner,
                provisional_id = %task.id(),
                error = %err,
                "failed to add task"
            );
            return Err(err.into());
        }
        self.load().await
    }

    /// Replaces the editable fields of task `id`, then reloads.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the update or reload fails.
    pub async fn update(&self, id: TaskId, fields: TaskFields) -> BoardResult<()> {
        self.patch(id, TaskPatch::from(fields), "failed to update task")
            .await
    }

    /// Moves task `id` to `status`, then reloads.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the update or reload fails.
    pub async fn change_status(&self, id: TaskId, status: TaskStatus) -> BoardResult<()> {
        self.patch(id, TaskPatch::status_only(status), "failed to update status")
            .await
    }

    /// Deletes task `id`, then reloads.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the delete or reload fails.
    pub async fn delete(&self, id: TaskId) -> BoardResult<()> {
        if let Err(err) = self.store.delete(&self.owner, id).await {
            error!(owner = %self.owner, task_id = %id, error = %err, "failed to delete task");
            return Err(err.into());
        }
        self.load().await
    }

    async fn patch(&self, id: TaskId, patch: TaskPatch, failure: &'static str) -> BoardResult<()> {
        if let Err(err) = self.store.update(&self.owner, id, &patch).await {
            error!(owner = %self.owner, task_id = %id, error = %err, "{failure}");
            return Err(err.into());
        }
        self.load().await
    }

    fn read(&self) -> BoardResult<RwLockReadGuard<'_, BoardState>> {
        self.state.read().map_err(|_| BoardError::StatePoisoned)
    }

    fn write(&self) -> BoardResult<RwLockWriteGuard<'_, BoardState>> {
        self.state.write().map_err(|_| BoardError::StatePoisoned)
    }
}
