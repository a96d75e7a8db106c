//! Task status management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewTaskStatus, TaskStatus, TaskStatusPatch};
use crate::domain::repositories::TaskStatusRepository;
use crate::error::AppError;

/// Service for task status CRUD.
pub struct TaskStatusService<R: TaskStatusRepository> {
    repository: Arc<R>,
}

impl<R: TaskStatusRepository> TaskStatusService<R> {
    /// Creates a new task status service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all statuses.
    pub async fn get_all(&self) -> Result<Vec<TaskStatus>, AppError> {
        self.repository.list().await
    }

    /// Fetches a status by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the status does not exist.
    pub async fn get_by_id(&self, id: i64) -> Result<TaskStatus, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                format!("Task status with id {id} not found"),
                json!({ "id": id }),
            )
        })
    }

    /// Creates a status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a duplicate name or slug.
    pub async fn create(&self, new_status: NewTaskStatus) -> Result<TaskStatus, AppError> {
        self.repository.create(new_status).await
    }

    /// Partially updates a status.
    pub async fn update(&self, id: i64, patch: TaskStatusPatch) -> Result<TaskStatus, AppError> {
        self.repository.update(id, patch).await
    }

    /// Deletes a status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the status is still used by
    /// tasks, [`AppError::NotFound`] when it does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(
                format!("Task status with id {id} not found"),
                json!({ "id": id }),
            ));
        }

        Ok(())
    }
}
