//! Repository trait for task statuses.

use crate::domain::entities::{NewTaskStatus, TaskStatus, TaskStatusPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing task statuses.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTaskStatusRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStatusRepository: Send + Sync {
    /// Creates a new task status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name or slug already exists.
    async fn create(&self, new_status: NewTaskStatus) -> Result<TaskStatus, AppError>;

    /// Finds a status by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<TaskStatus>, AppError>;

    /// Finds a status by its slug (case-sensitive).
    async fn find_by_slug(&self, slug: &str) -> Result<Option<TaskStatus>, AppError>;

    /// Lists all statuses ordered by id.
    async fn list(&self) -> Result<Vec<TaskStatus>, AppError>;

    /// Partially updates a status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no status matches `id`.
    async fn update(&self, id: i64, patch: TaskStatusPatch) -> Result<TaskStatus, AppError>;

    /// Deletes a status. Returns `Ok(false)` if the status did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the status is still referenced
    /// by tasks.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
