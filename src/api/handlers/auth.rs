//! Handler for the login endpoint.

use axum::{Json, extract::State};

use crate::api::dto::auth::LoginRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges credentials for a signed bearer token.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Request Body
///
/// ```json
/// { "username": "jane@example.com", "password": "qwerty" }
/// ```
///
/// # Response
///
/// The raw token as a plain-text body. Send it back as
/// `Authorization: Bearer <token>`.
///
/// # Errors
///
/// Returns 401 Unauthorized on unknown email or wrong password, without
/// revealing which of the two failed.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed bearer token", body = String),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<String, AppError> {
    state
        .auth_service
        .login(&payload.username, &payload.password)
        .await
}
