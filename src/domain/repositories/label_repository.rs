//! Repository trait for labels.

use crate::domain::entities::{Label, LabelPatch, NewLabel};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing labels.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLabelRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LabelRepository: Send + Sync {
    /// Creates a new label.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name already exists.
    async fn create(&self, new_label: NewLabel) -> Result<Label, AppError>;

    /// Finds a label by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Label>, AppError>;

    /// Returns the labels matching the given ids, in id order.
    ///
    /// Ids without a matching label are silently absent from the result;
    /// callers compare lengths to detect missing labels.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Label>, AppError>;

    /// Lists all labels ordered by id.
    async fn list(&self) -> Result<Vec<Label>, AppError>;

    /// Partially updates a label.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no label matches `id`.
    async fn update(&self, id: i64, patch: LabelPatch) -> Result<Label, AppError>;

    /// Deletes a label. Returns `Ok(false)` if the label did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the label is still attached
    /// to tasks.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
