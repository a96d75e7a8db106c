//! User entity representing an account that can log in and own tasks.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// `password_digest` holds the salted hash produced by
/// [`crate::utils::password`]; the raw password is never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password_digest: String,
}

/// Partial update for an existing user.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password_digest: Option<String>,
}

impl UserPatch {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password_digest.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch() {
        assert!(UserPatch::default().is_empty());
    }

    #[test]
    fn test_patch_with_email_is_not_empty() {
        let patch = UserPatch {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
