//! The fixed set of board statuses.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board status of a task, one per column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    /// Work is under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is paused.
    #[serde(rename = "On Hold")]
    OnHold,
    /// Work is finished.
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    /// Every status in column order.
    pub const ALL: [Self; 4] = [Self::ToDo, Self::InProgress, Self::OnHold, Self::Completed];

    /// Returns the label stored in the `status` column and shown on the board.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
        }
    }
}

/// Exact, case-sensitive match against the four labels.
impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
