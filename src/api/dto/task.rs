//! DTOs for task endpoints.
//!
//! The wire format renames several fields relative to the entity: `title`
//! maps to the task name, `content` to its description, and `status` is
//! the status slug. `assignee_id` is snake_case on the wire for historical
//! API compatibility while the other fields are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::services::{CreateTask, UpdateTask};
use crate::domain::entities::{Task, TaskFilter};

/// Request to create a task.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TaskCreateRequest {
    pub index: Option<i64>,

    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    pub content: Option<String>,

    /// Slug of an existing task status.
    #[validate(length(min = 1, message = "Status must not be empty"))]
    pub status: String,

    pub assignee_id: Option<i64>,

    #[serde(rename = "taskLabelIds", default)]
    pub task_label_ids: Vec<i64>,
}

impl TaskCreateRequest {
    pub fn into_command(self) -> CreateTask {
        CreateTask {
            index: self.index,
            name: self.title,
            description: self.content,
            status_slug: self.status,
            assignee_id: self.assignee_id,
            label_ids: self.task_label_ids,
        }
    }
}

/// Partial update for a task.
///
/// Nullable fields use double options so an explicit JSON `null` clears the
/// value while an absent field leaves it unchanged.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TaskUpdateRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub index: Option<Option<i64>>,

    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub content: Option<Option<String>>,

    /// Slug of an existing task status.
    #[validate(length(min = 1, message = "Status must not be empty"))]
    pub status: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub assignee_id: Option<Option<i64>>,

    #[serde(rename = "taskLabelIds")]
    pub task_label_ids: Option<Vec<i64>>,
}

impl TaskUpdateRequest {
    pub fn into_command(self) -> UpdateTask {
        UpdateTask {
            index: self.index,
            name: self.title,
            description: self.content,
            status_slug: self.status,
            assignee_id: self.assignee_id,
            label_ids: self.task_label_ids,
        }
    }
}

/// Filter parameters for task listing. All criteria combine with AND.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskQueryParams {
    /// Case-insensitive substring match on the title.
    #[serde(rename = "titleCont")]
    pub title_cont: Option<String>,

    /// Exact assignee id.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, rename = "assigneeId")]
    pub assignee_id: Option<i64>,

    /// Case-insensitive status slug.
    pub status: Option<String>,

    /// Tasks carrying this label.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, rename = "labelId")]
    pub label_id: Option<i64>,
}

impl From<TaskQueryParams> for TaskFilter {
    fn from(params: TaskQueryParams) -> Self {
        TaskFilter {
            title_cont: params.title_cont,
            assignee_id: params.assignee_id,
            status: params.status,
            label_id: params.label_id,
        }
    }
}

/// Wire representation of a task.
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: i64,
    pub index: Option<i64>,
    pub title: String,
    pub content: Option<String>,
    pub status: String,
    pub assignee_id: Option<i64>,

    #[serde(rename = "taskLabelIds")]
    pub task_label_ids: Vec<i64>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            index: task.index,
            title: task.name,
            content: task.description,
            status: task.status_slug,
            assignee_id: task.assignee_id,
            task_label_ids: task.label_ids,
            created_at: task.created_at,
        }
    }
}
