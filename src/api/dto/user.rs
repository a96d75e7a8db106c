//! DTOs for user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::utils::password::hash_password;

/// Request to register a user.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 3, message = "Password must be at least 3 characters"))]
    pub password: String,
}

impl UserCreateRequest {
    /// Maps the request into a domain [`NewUser`], hashing the password.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_digest: hash_password(&self.password),
        }
    }
}

/// Partial update for a user. Absent fields are unchanged.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 3, message = "Password must be at least 3 characters"))]
    pub password: Option<String>,
}

impl UserUpdateRequest {
    /// Maps the request into a domain [`UserPatch`], hashing the password
    /// when one is supplied.
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_digest: self.password.map(|p| hash_password(&p)),
        }
    }
}

/// Wire representation of a user. The password digest never leaves the server.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::verify_password;

    #[test]
    fn test_create_request_hashes_password() {
        let request: UserCreateRequest = serde_json::from_value(serde_json::json!({
            "firstName": "Jane",
            "email": "jane@example.com",
            "password": "qwerty"
        }))
        .unwrap();

        let new_user = request.into_new_user();
        assert_eq!(new_user.first_name.as_deref(), Some("Jane"));
        assert_ne!(new_user.password_digest, "qwerty");
        assert_eq!(verify_password("qwerty", &new_user.password_digest), Ok(true));
    }

    #[test]
    fn test_create_request_validation() {
        let request: UserCreateRequest = serde_json::from_value(serde_json::json!({
            "email": "not-an-email",
            "password": "pw"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_update_request_without_password_leaves_digest_unchanged() {
        let request: UserUpdateRequest =
            serde_json::from_value(serde_json::json!({ "lastName": "Doe" })).unwrap();

        let patch = request.into_patch();
        assert_eq!(patch.last_name.as_deref(), Some("Doe"));
        assert!(patch.password_digest.is_none());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let user = User {
            id: 1,
            first_name: Some("Jane".to_string()),
            last_name: None,
            email: "jane@example.com".to_string(),
            password_digest: "v1$00$00".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let body = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(body["firstName"], "Jane");
        assert!(body.get("createdAt").is_some());
        assert!(body.get("password_digest").is_none());
        assert!(body.get("passwordDigest").is_none());
    }
}
