//! Domain model for the task board.
//!
//! Tasks are owned by a single user and grouped into four fixed status
//! columns. The domain keeps every storage and session concern outside its
//! boundary.

mod columns;
mod error;
mod ids;
mod status;
mod task;

pub use columns::{BoardColumns, Column, hidden_tasks};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskDate, TaskId, UserId};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, ProvisionalTask, Task, TaskFields, TaskPatch};
