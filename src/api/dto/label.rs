//! DTOs for label endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{Label, LabelPatch, NewLabel};

/// Request to create a label.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LabelCreateRequest {
    #[validate(length(min = 3, max = 1000, message = "Name must be 3 to 1000 characters"))]
    pub name: String,
}

impl LabelCreateRequest {
    pub fn into_new_label(self) -> NewLabel {
        NewLabel { name: self.name }
    }
}

/// Partial update for a label. An absent name is unchanged.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LabelUpdateRequest {
    #[validate(length(min = 3, max = 1000, message = "Name must be 3 to 1000 characters"))]
    pub name: Option<String>,
}

impl LabelUpdateRequest {
    pub fn into_patch(self) -> LabelPatch {
        LabelPatch { name: self.name }
    }
}

/// Wire representation of a label.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabelResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Label> for LabelResponse {
    fn from(label: Label) -> Self {
        Self {
            id: label.id,
            name: label.name,
            created_at: label.created_at,
        }
    }
}
