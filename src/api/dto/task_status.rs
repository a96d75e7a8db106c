//! DTOs for task status endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{NewTaskStatus, TaskStatus, TaskStatusPatch};

/// Request to create a task status.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TaskStatusCreateRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Slug must not be empty"))]
    pub slug: String,
}

impl TaskStatusCreateRequest {
    pub fn into_new_status(self) -> NewTaskStatus {
        NewTaskStatus {
            name: self.name,
            slug: self.slug,
        }
    }
}

/// Partial update for a task status. Absent fields are unchanged.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TaskStatusUpdateRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Slug must not be empty"))]
    pub slug: Option<String>,
}

impl TaskStatusUpdateRequest {
    pub fn into_patch(self) -> TaskStatusPatch {
        TaskStatusPatch {
            name: self.name,
            slug: self.slug,
        }
    }
}

/// Wire representation of a task status.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<TaskStatus> for TaskStatusResponse {
    fn from(status: TaskStatus) -> Self {
        Self {
            id: status.id,
            name: status.name,
            slug: status.slug,
            created_at: status.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_empty_slug() {
        let request: TaskStatusCreateRequest =
            serde_json::from_value(serde_json::json!({ "name": "Draft", "slug": "" })).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("slug"));
    }

    #[test]
    fn test_update_request_with_no_fields_is_valid() {
        let request: TaskStatusUpdateRequest =
            serde_json::from_value(serde_json::json!({})).unwrap();

        assert!(request.validate().is_ok());
        let patch = request.into_patch();
        assert!(patch.name.is_none() && patch.slug.is_none());
    }
}
