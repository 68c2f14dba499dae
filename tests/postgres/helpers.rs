//! Shared setup for the `PostgreSQL` task store tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use super::cluster::ManagedCluster;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use taskboard::board::adapters::postgres::PostgresTaskStore;
use taskboard::config::BackendConfig;
use tokio::runtime::Runtime;

/// SQL creating the `tasks` table.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../migrations/2024-01-01-000000_create_tasks/up.sql");

/// Template database holding the migrated schema.
pub const TEMPLATE_DB: &str = "taskboard_test_template";

/// Builds the runtime the store's blocking calls run on.
pub fn test_runtime() -> Result<Runtime, BoxError> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| Box::new(err) as BoxError)
}

/// Ensures the template database exists with the schema applied.
pub fn ensure_template(cluster: &ManagedCluster) -> Result<(), BoxError> {
    let connection = cluster.connection();
    cluster.ensure_template_exists(TEMPLATE_DB, move |db_name| {
        apply_migrations(&connection.database_url(db_name))
    })
}

fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_TASKS_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// Creates `db_name` from the template and connects a store to it through
/// the same settings path the application uses.
pub fn setup_store(cluster: &ManagedCluster, db_name: &str) -> Result<PostgresTaskStore, BoxError> {
    cluster.create_database_from_template(db_name, TEMPLATE_DB)?;
    let config = BackendConfig::new(cluster.connection().database_url(db_name))
        .and_then(|config| config.with_max_pool_size(1))
        .map_err(|err| Box::new(err) as BoxError)?;
    PostgresTaskStore::connect(&config).map_err(|err| Box::new(err) as BoxError)
}

/// Runs raw SQL against `db_name`, standing in for edits made outside the
/// application.
pub fn execute_sql(cluster: &ManagedCluster, db_name: &str, sql: &str) -> Result<(), BoxError> {
    let url = cluster.connection().database_url(db_name);
    let mut conn = PgConnection::establish(&url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(sql)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// Drops the test database when the test ends, pass or fail.
pub struct CleanupGuard<'a> {
    cluster: &'a ManagedCluster,
    db_name: Option<String>,
}

impl<'a> CleanupGuard<'a> {
    #[must_use]
    pub const fn new(cluster: &'a ManagedCluster, db_name: String) -> Self {
        Self {
            cluster,
            db_name: Some(db_name),
        }
    }

    /// Drops the database now and reports failures.
    pub fn cleanup(mut self) -> Result<(), BoxError> {
        match self.db_name.take() {
            Some(db_name) => self.cluster.drop_database(&db_name),
            None => Ok(()),
        }
    }
}

impl Drop for CleanupGuard<'_> {
    fn drop(&mut self) {
        if let Some(db_name) = self.db_name.take() {
            drop(self.cluster.drop_database(&db_name));
        }
    }
}
