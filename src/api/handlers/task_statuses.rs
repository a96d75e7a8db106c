//! Handlers for task status endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::AppendHeaders,
};
use validator::Validate;

use crate::api::dto::task_status::{
    TaskStatusCreateRequest, TaskStatusResponse, TaskStatusUpdateRequest,
};
use crate::api::handlers::X_TOTAL_COUNT;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all task statuses.
///
/// # Endpoint
///
/// `GET /api/task_statuses`
#[utoipa::path(
    get,
    path = "/api/task_statuses",
    responses(
        (status = 200, description = "All task statuses", body = [TaskStatusResponse],
         headers(("x-total-count" = i64, description = "Total number of statuses"))),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "task_statuses"
)]
pub async fn task_status_list_handler(
    State(state): State<AppState>,
) -> Result<(AppendHeaders<[(&'static str, String); 1]>, Json<Vec<TaskStatusResponse>>), AppError> {
    let statuses = state.task_status_service.get_all().await?;
    let total = statuses.len();

    Ok((
        AppendHeaders([(X_TOTAL_COUNT, total.to_string())]),
        Json(statuses.into_iter().map(TaskStatusResponse::from).collect()),
    ))
}

/// Fetches a single task status.
///
/// # Endpoint
///
/// `GET /api/task_statuses/{id}`
#[utoipa::path(
    get,
    path = "/api/task_statuses/{id}",
    params(("id" = i64, Path, description = "Task status id")),
    responses(
        (status = 200, description = "The task status", body = TaskStatusResponse),
        (status = 404, description = "Task status not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "task_statuses"
)]
pub async fn task_status_show_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TaskStatusResponse>, AppError> {
    let status = state.task_status_service.get_by_id(id).await?;
    Ok(Json(status.into()))
}

/// Creates a task status.
///
/// # Endpoint
///
/// `POST /api/task_statuses`
#[utoipa::path(
    post,
    path = "/api/task_statuses",
    request_body = TaskStatusCreateRequest,
    responses(
        (status = 201, description = "Created task status", body = TaskStatusResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Name or slug already taken"),
    ),
    security(("bearer_auth" = [])),
    tag = "task_statuses"
)]
pub async fn task_status_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<TaskStatusCreateRequest>,
) -> Result<(StatusCode, Json<TaskStatusResponse>), AppError> {
    payload.validate()?;

    let status = state
        .task_status_service
        .create(payload.into_new_status())
        .await?;

    Ok((StatusCode::CREATED, Json(status.into())))
}

/// Partially updates a task status.
///
/// # Endpoint
///
/// `PUT /api/task_statuses/{id}`
#[utoipa::path(
    put,
    path = "/api/task_statuses/{id}",
    params(("id" = i64, Path, description = "Task status id")),
    request_body = TaskStatusUpdateRequest,
    responses(
        (status = 200, description = "Updated task status", body = TaskStatusResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Task status not found"),
        (status = 409, description = "Name or slug already taken"),
    ),
    security(("bearer_auth" = [])),
    tag = "task_statuses"
)]
pub async fn task_status_update_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<TaskStatusUpdateRequest>,
) -> Result<Json<TaskStatusResponse>, AppError> {
    payload.validate()?;

    let status = state
        .task_status_service
        .update(id, payload.into_patch())
        .await?;

    Ok(Json(status.into()))
}

/// Deletes a task status.
///
/// # Endpoint
///
/// `DELETE /api/task_statuses/{id}`
///
/// # Errors
///
/// Returns 400 when tasks still reference the status.
#[utoipa::path(
    delete,
    path = "/api/task_statuses/{id}",
    params(("id" = i64, Path, description = "Task status id")),
    responses(
        (status = 204, description = "Task status deleted"),
        (status = 400, description = "Tasks still reference this status"),
        (status = 404, description = "Task status not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "task_statuses"
)]
pub async fn task_status_delete_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.task_status_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
