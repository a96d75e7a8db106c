//! Handlers for task endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::AppendHeaders,
};
use validator::Validate;

use crate::api::dto::task::{
    TaskCreateRequest, TaskQueryParams, TaskResponse, TaskUpdateRequest,
};
use crate::api::handlers::X_TOTAL_COUNT;
use crate::domain::entities::TaskFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Lists tasks, optionally filtered.
///
/// # Endpoint
///
/// `GET /api/tasks?titleCont=...&assigneeId=...&status=...&labelId=...`
///
/// All filter criteria combine with AND.
#[utoipa::path(
    get,
    path = "/api/tasks",
    params(TaskQueryParams),
    responses(
        (status = 200, description = "Matching tasks", body = [TaskResponse],
         headers(("x-total-count" = i64, description = "Number of matching tasks"))),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn task_list_handler(
    Query(params): Query<TaskQueryParams>,
    State(state): State<AppState>,
) -> Result<(AppendHeaders<[(&'static str, String); 1]>, Json<Vec<TaskResponse>>), AppError> {
    let filter: TaskFilter = params.into();
    let tasks = state.task_service.get_all(&filter).await?;
    let total = tasks.len();

    Ok((
        AppendHeaders([(X_TOTAL_COUNT, total.to_string())]),
        Json(tasks.into_iter().map(TaskResponse::from).collect()),
    ))
}

/// Fetches a single task.
///
/// # Endpoint
///
/// `GET /api/tasks/{id}`
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "The task", body = TaskResponse),
        (status = 404, description = "Task not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn task_show_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TaskResponse>, AppError> {
    let task = state.task_service.get_by_id(id).await?;
    Ok(Json(task.into()))
}

/// Creates a task.
///
/// # Endpoint
///
/// `POST /api/tasks`
///
/// # Errors
///
/// Returns 400 when the status slug, assignee or any label id does not
/// resolve to an existing row.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = TaskCreateRequest,
    responses(
        (status = 201, description = "Created task", body = TaskResponse),
        (status = 400, description = "Validation failed or unknown reference"),
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn task_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<TaskCreateRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    payload.validate()?;

    let task = state.task_service.create(payload.into_command()).await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// Partially updates a task.
///
/// # Endpoint
///
/// `PUT /api/tasks/{id}`
///
/// An explicit JSON `null` clears a nullable field; an absent field leaves
/// it unchanged.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    request_body = TaskUpdateRequest,
    responses(
        (status = 200, description = "Updated task", body = TaskResponse),
        (status = 400, description = "Validation failed or unknown reference"),
        (status = 404, description = "Task not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn task_update_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<TaskUpdateRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    payload.validate()?;

    let task = state
        .task_service
        .update(id, payload.into_command())
        .await?;

    Ok(Json(task.into()))
}

/// Deletes a task.
///
/// # Endpoint
///
/// `DELETE /api/tasks/{id}`
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn task_delete_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.task_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
