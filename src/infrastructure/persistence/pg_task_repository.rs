//! PostgreSQL implementation of the task repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

use crate::domain::entities::{NewTask, Task, TaskFilter, TaskPatch};
use crate::domain::repositories::TaskRepository;
use crate::error::AppError;

/// Row shape shared by every task query: the task columns joined with the
/// status slug and the aggregated label ids.
#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    index: Option<i64>,
    name: String,
    description: Option<String>,
    status_id: i64,
    status_slug: String,
    assignee_id: Option<i64>,
    label_ids: Vec<i64>,
    created_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            index: row.index,
            name: row.name,
            description: row.description,
            status_id: row.status_id,
            status_slug: row.status_slug,
            assignee_id: row.assignee_id,
            label_ids: row.label_ids,
            created_at: row.created_at,
        }
    }
}

const TASK_SELECT: &str = r#"
    SELECT t.id,
           t."index",
           t.name,
           t.description,
           t.status_id,
           s.slug AS status_slug,
           t.assignee_id,
           COALESCE(
               ARRAY(
                   SELECT tl.label_id FROM task_labels tl
                   WHERE tl.task_id = t.id
                   ORDER BY tl.label_id
               ),
               '{}'
           ) AS label_ids,
           t.created_at
    FROM tasks t
    JOIN task_statuses s ON s.id = t.status_id
"#;

/// PostgreSQL repository for task storage and retrieval.
///
/// Creation and updates run in a transaction because label attachments live
/// in a separate join table and must stay consistent with the task row.
pub struct PgTaskRepository {
    pool: Arc<PgPool>,
}

impl PgTaskRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Fetches the full task row (status slug and labels included) inside
    /// an open transaction.
    async fn fetch_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> Result<Option<Task>, AppError> {
        let query = format!("{TASK_SELECT} WHERE t.id = $1");
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(row.map(Task::from))
    }

    /// Replaces the label attachments of a task.
    async fn replace_labels(
        tx: &mut Transaction<'_, Postgres>,
        task_id: i64,
        label_ids: &[i64],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM task_labels WHERE task_id = $1")
            .bind(task_id)
            .execute(&mut **tx)
            .await?;

        if !label_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO task_labels (task_id, label_id)
                SELECT $1, unnest($2::bigint[])
                "#,
            )
            .bind(task_id)
            .bind(label_ids)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, new_task: NewTask) -> Result<Task, AppError> {
        let mut tx = self.pool.begin().await?;

        let task_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tasks ("index", name, description, status_id, assignee_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(new_task.index)
        .bind(&new_task.name)
        .bind(&new_task.description)
        .bind(new_task.status_id)
        .bind(new_task.assignee_id)
        .fetch_one(&mut *tx)
        .await?;

        Self::replace_labels(&mut tx, task_id, &new_task.label_ids).await?;

        let task = Self::fetch_in_tx(&mut tx, task_id).await?.ok_or_else(|| {
            AppError::internal("Task vanished during creation", json!({ "id": task_id }))
        })?;

        tx.commit().await?;

        Ok(task)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError> {
        let query = format!("{TASK_SELECT} WHERE t.id = $1");
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Task::from))
    }

    async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError> {
        let query = format!(
            r#"{TASK_SELECT}
            WHERE ($1::text IS NULL OR t.name ILIKE '%' || $1 || '%')
              AND ($2::bigint IS NULL OR t.assignee_id = $2)
              AND ($3::text IS NULL OR lower(s.slug) = lower($3))
              AND ($4::bigint IS NULL OR EXISTS (
                  SELECT 1 FROM task_labels fl
                  WHERE fl.task_id = t.id AND fl.label_id = $4
              ))
            ORDER BY t.id
            "#
        );

        let rows = sqlx::query_as::<_, TaskRow>(&query)
            .bind(&filter.title_cont)
            .bind(filter.assignee_id)
            .bind(&filter.status)
            .bind(filter.label_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Task, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = Self::fetch_in_tx(&mut tx, id).await?.ok_or_else(|| {
            AppError::not_found(format!("Task with id {id} not found"), json!({ "id": id }))
        })?;

        // Merge the patch over the current row; inner options carry the
        // explicit-null ("clear") case for nullable columns.
        let index = patch.index.unwrap_or(current.index);
        let name = patch.name.unwrap_or(current.name);
        let description = patch.description.unwrap_or(current.description);
        let status_id = patch.status_id.unwrap_or(current.status_id);
        let assignee_id = patch.assignee_id.unwrap_or(current.assignee_id);

        sqlx::query(
            r#"
            UPDATE tasks
            SET "index" = $2, name = $3, description = $4, status_id = $5, assignee_id = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(index)
        .bind(&name)
        .bind(&description)
        .bind(status_id)
        .bind(assignee_id)
        .execute(&mut *tx)
        .await?;

        if let Some(label_ids) = &patch.label_ids {
            Self::replace_labels(&mut tx, id, label_ids).await?;
        }

        let task = Self::fetch_in_tx(&mut tx, id).await?.ok_or_else(|| {
            AppError::internal("Task vanished during update", json!({ "id": id }))
        })?;

        tx.commit().await?;

        Ok(task)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
