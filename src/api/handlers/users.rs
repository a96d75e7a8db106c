//! Handlers for user management endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::AppendHeaders,
};
use validator::Validate;

use crate::api::dto::user::{UserCreateRequest, UserResponse, UserUpdateRequest};
use crate::api::handlers::X_TOTAL_COUNT;
use crate::application::services::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
///
/// The `X-Total-Count` header carries the collection size.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse],
         headers(("x-total-count" = i64, description = "Total number of users"))),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<(AppendHeaders<[(&'static str, String); 1]>, Json<Vec<UserResponse>>), AppError> {
    let users = state.user_service.get_all().await?;
    let total = users.len();

    Ok((
        AppendHeaders([(X_TOTAL_COUNT, total.to_string())]),
        Json(users.into_iter().map(UserResponse::from).collect()),
    ))
}

/// Fetches a single user.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn user_show_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_by_id(id).await?;
    Ok(Json(user.into()))
}

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Errors
///
/// Returns 400 on validation failure, 409 when the email is taken.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserCreateRequest,
    responses(
        (status = 201, description = "Created user", body = UserResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email already registered"),
    ),
    tag = "users"
)]
pub async fn user_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserCreateRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state.user_service.create(payload.into_new_user()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Partially updates a user. Owner only.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
///
/// # Errors
///
/// Returns 403 when the caller is not the account owner.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserUpdateRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn user_update_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<UserUpdateRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .update(id, payload.into_patch(), auth_user.id)
        .await?;

    Ok(Json(user.into()))
}

/// Deletes a user. Owner only.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// # Errors
///
/// Returns 400 when the user still has assigned tasks, 403 when the
/// caller is not the account owner.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "User still has assigned tasks"),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn user_delete_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete(id, auth_user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
