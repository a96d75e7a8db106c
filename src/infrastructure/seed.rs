//! Startup data seeding.
//!
//! Creates the default administrator account when the database does not
//! have one yet, mirroring a first-run provisioning step. Idempotent.

use std::sync::Arc;

use crate::domain::entities::NewUser;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Email of the account seeded on first startup.
pub const DEFAULT_USER_EMAIL: &str = "hexlet@example.com";

/// Ensures the default user exists, creating it with the given password
/// when absent.
pub async fn seed_default_user<R: UserRepository>(
    repository: Arc<R>,
    password: &str,
) -> Result<(), AppError> {
    if repository.find_by_email(DEFAULT_USER_EMAIL).await?.is_some() {
        return Ok(());
    }

    repository
        .create(NewUser {
            first_name: None,
            last_name: None,
            email: DEFAULT_USER_EMAIL.to_string(),
            password_digest: hash_password(password),
        })
        .await?;

    tracing::info!("Seeded default user {DEFAULT_USER_EMAIL}");

    Ok(())
}
