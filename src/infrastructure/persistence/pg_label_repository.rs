//! PostgreSQL implementation of the label repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Label, LabelPatch, NewLabel};
use crate::domain::repositories::LabelRepository;
use crate::error::AppError;

/// PostgreSQL repository for label storage and retrieval.
pub struct PgLabelRepository {
    pool: Arc<PgPool>,
}

impl PgLabelRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LabelRepository for PgLabelRepository {
    async fn create(&self, new_label: NewLabel) -> Result<Label, AppError> {
        let label = sqlx::query_as::<_, Label>(
            r#"
            INSERT INTO labels (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(new_label.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(label)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Label>, AppError> {
        let label =
            sqlx::query_as::<_, Label>("SELECT id, name, created_at FROM labels WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(label)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Label>, AppError> {
        let labels = sqlx::query_as::<_, Label>(
            "SELECT id, name, created_at FROM labels WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(labels)
    }

    async fn list(&self) -> Result<Vec<Label>, AppError> {
        let labels =
            sqlx::query_as::<_, Label>("SELECT id, name, created_at FROM labels ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(labels)
    }

    async fn update(&self, id: i64, patch: LabelPatch) -> Result<Label, AppError> {
        let label = sqlx::query_as::<_, Label>(
            r#"
            UPDATE labels
            SET name = COALESCE($2, name)
            WHERE id = $1
            RETURNING id, name, created_at
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        label.ok_or_else(|| {
            AppError::not_found(format!("Label with id {id} not found"), json!({ "id": id }))
        })
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM labels WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
