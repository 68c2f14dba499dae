//! Column derivation: grouping a task snapshot by exact status label.

use super::{Task, TaskId, TaskStatus};

/// The tasks shown under one status heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    status: TaskStatus,
    tasks: Vec<&'a Task>,
}

impl<'a> Column<'a> {
    /// Returns the column status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.status.as_str()
    }

    /// Returns the tasks in snapshot order.
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Returns `true` when the column holds the given task id.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id() == id)
    }
}

/// The four board columns in fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumns<'a> {
    columns: [Column<'a>; 4],
}

impl<'a> BoardColumns<'a> {
    /// Partitions `tasks` into the four columns.
    ///
    /// Each column is an independent filter on the exact label, so a task
    /// whose label matches none of them is in no column.
    #[must_use]
    pub fn partition(tasks: &'a [Task]) -> Self {
        let columns = TaskStatus::ALL.map(|status| Column {
            status,
            tasks: tasks
                .iter()
                .filter(|task| task.status_label() == status.as_str())
                .collect(),
        });
        Self { columns }
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &Column<'a> {
        match status {
            TaskStatus::ToDo => &self.columns[0],
            TaskStatus::InProgress => &self.columns[1],
            TaskStatus::OnHold => &self.columns[2],
            TaskStatus::Completed => &self.columns[3],
        }
    }

    /// Iterates the columns in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Column<'a>> {
        self.columns.iter()
    }

    /// Returns the statuses of every column holding `id`.
    #[must_use]
    pub fn columns_containing(&self, id: TaskId) -> Vec<TaskStatus> {
        self.columns
            .iter()
            .filter(|column| column.contains(id))
            .map(Column::status)
            .collect()
    }
}

/// Returns the tasks whose status label is outside the fixed set.
pub fn hidden_tasks(tasks: &[Task]) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(|task| task.status().is_none())
}
