//! Label management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Label, LabelPatch, NewLabel};
use crate::domain::repositories::LabelRepository;
use crate::error::AppError;

/// Service for label CRUD.
pub struct LabelService<R: LabelRepository> {
    repository: Arc<R>,
}

impl<R: LabelRepository> LabelService<R> {
    /// Creates a new label service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all labels.
    pub async fn get_all(&self) -> Result<Vec<Label>, AppError> {
        self.repository.list().await
    }

    /// Fetches a label by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the label does not exist.
    pub async fn get_by_id(&self, id: i64) -> Result<Label, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("Label with id {id} not found"), json!({ "id": id }))
        })
    }

    /// Creates a label.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a duplicate name.
    pub async fn create(&self, new_label: NewLabel) -> Result<Label, AppError> {
        self.repository.create(new_label).await
    }

    /// Partially updates a label.
    pub async fn update(&self, id: i64, patch: LabelPatch) -> Result<Label, AppError> {
        self.repository.update(id, patch).await
    }

    /// Deletes a label.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the label is still attached to
    /// tasks, [`AppError::NotFound`] when it does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(
                format!("Label with id {id} not found"),
                json!({ "id": id }),
            ));
        }

        Ok(())
    }
}
