//! DTOs for the login endpoint.

use serde::Deserialize;
use utoipa::ToSchema;

/// Login credentials. `username` carries the account email.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
