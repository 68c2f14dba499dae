//! Application services for the task board.

mod controller;
mod forms;

pub use controller::{BoardController, BoardError, BoardResult};
pub use forms::{CreateTaskForm, EditTaskForm, FormError, StatusSelect, TaskDraft};
