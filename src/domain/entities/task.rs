//! Task entity, the central aggregate of the tracker.

use chrono::{DateTime, Utc};

/// A task with its resolved status slug and attached label ids.
///
/// `status_slug` is denormalized from the referenced [`super::TaskStatus`]
/// because the wire format identifies statuses by slug, not id.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: i64,
    pub index: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub status_id: i64,
    pub status_slug: String,
    pub assignee_id: Option<i64>,
    pub label_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub index: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub status_id: i64,
    pub assignee_id: Option<i64>,
    pub label_ids: Vec<i64>,
}

/// Partial update for an existing task.
///
/// Outer `None` leaves a field unchanged. For nullable columns the inner
/// option distinguishes "set" from "clear": `assignee_id: Some(None)`
/// unassigns the task, `Some(Some(id))` reassigns it.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub index: Option<Option<i64>>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub status_id: Option<i64>,
    pub assignee_id: Option<Option<i64>>,
    pub label_ids: Option<Vec<i64>>,
}

/// Filter criteria for task listing.
///
/// All criteria are optional and combined with AND.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring match on the task name.
    pub title_cont: Option<String>,
    /// Exact assignee match.
    pub assignee_id: Option<i64>,
    /// Case-insensitive status slug match.
    pub status: Option<String>,
    /// Tasks carrying this label.
    pub label_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_distinguishes_clear_from_unchanged() {
        let unchanged = TaskPatch::default();
        assert!(unchanged.assignee_id.is_none());

        let cleared = TaskPatch {
            assignee_id: Some(None),
            ..Default::default()
        };
        assert_eq!(cleared.assignee_id, Some(None));
    }
}
