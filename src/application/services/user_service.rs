//! User account management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for user CRUD with ownership enforcement.
///
/// Updates and deletes are restricted to the account owner: the id of the
/// authenticated caller must match the target id.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all users.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Fetches a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_by_id(&self, id: i64) -> Result<User, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("User with id {id} not found"), json!({ "id": id }))
        })
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        self.repository.create(new_user).await
    }

    /// Updates a user. Only the owner may update their own account.
    ///
    /// An empty patch performs no write and returns the current record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when `actor_id` differs from `id`.
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn update(&self, id: i64, patch: UserPatch, actor_id: i64) -> Result<User, AppError> {
        self.check_owner(id, actor_id)?;

        if patch.is_empty() {
            return self.get_by_id(id).await;
        }

        self.repository.update(id, patch).await
    }

    /// Deletes a user. Only the owner may delete their own account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when `actor_id` differs from `id`.
    /// Returns [`AppError::Validation`] when the user still has assigned tasks.
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete(&self, id: i64, actor_id: i64) -> Result<(), AppError> {
        self.check_owner(id, actor_id)?;

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(
                format!("User with id {id} not found"),
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    fn check_owner(&self, id: i64, actor_id: i64) -> Result<(), AppError> {
        if id != actor_id {
            return Err(AppError::forbidden(
                "Only the account owner may modify this user",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }
}
