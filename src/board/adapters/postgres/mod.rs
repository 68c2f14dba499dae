//! `PostgreSQL` adapter for the hosted task table.

mod models;
mod schema;
mod store;

pub use store::{PostgresTaskStore, TaskPgPool};
