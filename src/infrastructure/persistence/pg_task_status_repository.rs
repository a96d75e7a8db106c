//! PostgreSQL implementation of the task status repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTaskStatus, TaskStatus, TaskStatusPatch};
use crate::domain::repositories::TaskStatusRepository;
use crate::error::AppError;

/// PostgreSQL repository for task status storage and retrieval.
pub struct PgTaskStatusRepository {
    pool: Arc<PgPool>,
}

impl PgTaskStatusRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStatusRepository for PgTaskStatusRepository {
    async fn create(&self, new_status: NewTaskStatus) -> Result<TaskStatus, AppError> {
        let status = sqlx::query_as::<_, TaskStatus>(
            r#"
            INSERT INTO task_statuses (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(new_status.name)
        .bind(new_status.slug)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(status)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TaskStatus>, AppError> {
        let status = sqlx::query_as::<_, TaskStatus>(
            "SELECT id, name, slug, created_at FROM task_statuses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(status)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<TaskStatus>, AppError> {
        let status = sqlx::query_as::<_, TaskStatus>(
            "SELECT id, name, slug, created_at FROM task_statuses WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(status)
    }

    async fn list(&self) -> Result<Vec<TaskStatus>, AppError> {
        let statuses = sqlx::query_as::<_, TaskStatus>(
            "SELECT id, name, slug, created_at FROM task_statuses ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(statuses)
    }

    async fn update(&self, id: i64, patch: TaskStatusPatch) -> Result<TaskStatus, AppError> {
        let status = sqlx::query_as::<_, TaskStatus>(
            r#"
            UPDATE task_statuses
            SET name = COALESCE($2, name),
                slug = COALESCE($3, slug)
            WHERE id = $1
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        status.ok_or_else(|| {
            AppError::not_found(
                format!("Task status with id {id} not found"),
                json!({ "id": id }),
            )
        })
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM task_statuses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
