//! `PostgreSQL` task store over the hosted `tasks` table.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::board::{
    domain::{NewTask, PersistedTaskData, Task, TaskDate, TaskId, TaskPatch, UserId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use crate::config::BackendConfig;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the task store.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a store from an existing connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] if the pool cannot open its
    /// initial connections.
    pub fn connect(config: &BackendConfig) -> TaskStoreResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(config.database_url());
        let pool = Pool::builder()
            .max_size(config.max_pool_size())
            .build(manager)
            .map_err(|err| TaskStoreError::Unavailable(err.to_string()))?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| TaskStoreError::Unavailable(err.to_string()))?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn list_by_user(&self, user_id: &UserId) -> TaskStoreResult<Vec<Task>> {
        let owner = user_id.into_inner();
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::user_id.eq(owner))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn insert(&self, task: &NewTask) -> TaskStoreResult<()> {
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn update(&self, owner: &UserId, id: TaskId, patch: &TaskPatch) -> TaskStoreResult<()> {
        // Diesel refuses an UPDATE without any SET clause.
        if patch.is_empty() {
            return Ok(());
        }
        let owner_id = owner.into_inner();
        let changeset = to_changeset(patch);
        self.run_blocking(move |connection| {
            diesel::update(
                tasks::table
                    .filter(tasks::id.eq(id.value()))
                    .filter(tasks::user_id.eq(owner_id)),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(TaskStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, owner: &UserId, id: TaskId) -> TaskStoreResult<()> {
        let owner_id = owner.into_inner();
        self.run_blocking(move |connection| {
            diesel::delete(
                tasks::table
                    .filter(tasks::id.eq(id.value()))
                    .filter(tasks::user_id.eq(owner_id)),
            )
            .execute(connection)
            .map_err(TaskStoreError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    let fields = task.fields();
    NewTaskRow {
        title: fields.title().to_owned(),
        description: fields.description().to_owned(),
        status: fields.status().as_str().to_owned(),
        date: fields.date().into_inner(),
        user_id: task.user_id().into_inner(),
    }
}

fn to_changeset(patch: &TaskPatch) -> TaskChangeset {
    TaskChangeset {
        title: patch.title.clone(),
        description: patch.description.clone(),
        status: patch.status.map(|status| status.as_str().to_owned()),
        date: patch.date.map(TaskDate::into_inner),
    }
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        title,
        description,
        status,
        date,
        user_id,
    } = row;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        status,
        date: TaskDate::from_naive(date),
        user_id: UserId::from_uuid(user_id),
    })
}
