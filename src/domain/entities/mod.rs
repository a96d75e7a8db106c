//! Domain entities for the task tracker.

pub mod label;
pub mod task;
pub mod task_status;
pub mod user;

pub use label::{Label, LabelPatch, NewLabel};
pub use task::{NewTask, Task, TaskFilter, TaskPatch};
pub use task_status::{NewTaskStatus, TaskStatus, TaskStatusPatch};
pub use user::{NewUser, User, UserPatch};
