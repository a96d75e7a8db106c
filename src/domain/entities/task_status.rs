//! Task status entity (workflow column such as "draft" or "published").

use chrono::{DateTime, Utc};

/// A workflow state that every task must reference.
///
/// The `slug` is the stable machine identifier used on the wire; `name`
/// is the human-readable label. Both are unique.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaskStatus {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a task status.
#[derive(Debug, Clone)]
pub struct NewTaskStatus {
    pub name: String,
    pub slug: String,
}

/// Partial update for an existing task status.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct TaskStatusPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
}
