//! Label entity for tagging tasks.

use chrono::{DateTime, Utc};

/// A tag that can be attached to any number of tasks.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Label {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a label.
#[derive(Debug, Clone)]
pub struct NewLabel {
    pub name: String,
}

/// Partial update for an existing label.
#[derive(Debug, Clone, Default)]
pub struct LabelPatch {
    pub name: Option<String>,
}
