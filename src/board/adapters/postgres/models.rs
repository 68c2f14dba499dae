//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Raw status label.
    pub status: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Owning user.
    pub user_id: uuid::Uuid,
}

/// Insert model for task records; `id` is left to the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status label.
    pub status: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Owning user.
    pub user_id: uuid::Uuid,
}

/// Partial update model; `None` columns are not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status label.
    pub status: Option<String>,
    /// Replacement date.
    pub date: Option<NaiveDate>,
}
