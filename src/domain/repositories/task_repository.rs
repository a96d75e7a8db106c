//! Repository trait for tasks.

use crate::domain::entities::{NewTask, Task, TaskFilter, TaskPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing tasks.
///
/// Tasks are stored with their label attachments; every returned [`Task`]
/// carries the resolved status slug and the full set of label ids.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTaskRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Creates a task together with its label attachments, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the status, assignee, or a label
    /// id does not exist (foreign key violation).
    async fn create(&self, new_task: NewTask) -> Result<Task, AppError>;

    /// Finds a task by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError>;

    /// Lists tasks matching the filter, ordered by id.
    ///
    /// An empty [`TaskFilter`] returns every task.
    async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError>;

    /// Partially updates a task. When `patch.label_ids` is set, the label
    /// attachments are replaced wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no task matches `id`.
    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Task, AppError>;

    /// Deletes a task and its label attachments. Returns `Ok(false)` if the
    /// task did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
