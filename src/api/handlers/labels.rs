//! Handlers for label endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::AppendHeaders,
};
use validator::Validate;

use crate::api::dto::label::{LabelCreateRequest, LabelResponse, LabelUpdateRequest};
use crate::api::handlers::X_TOTAL_COUNT;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all labels.
///
/// # Endpoint
///
/// `GET /api/labels`
#[utoipa::path(
    get,
    path = "/api/labels",
    responses(
        (status = 200, description = "All labels", body = [LabelResponse],
         headers(("x-total-count" = i64, description = "Total number of labels"))),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "labels"
)]
pub async fn label_list_handler(
    State(state): State<AppState>,
) -> Result<(AppendHeaders<[(&'static str, String); 1]>, Json<Vec<LabelResponse>>), AppError> {
    let labels = state.label_service.get_all().await?;
    let total = labels.len();

    Ok((
        AppendHeaders([(X_TOTAL_COUNT, total.to_string())]),
        Json(labels.into_iter().map(LabelResponse::from).collect()),
    ))
}

/// Fetches a single label.
///
/// # Endpoint
///
/// `GET /api/labels/{id}`
#[utoipa::path(
    get,
    path = "/api/labels/{id}",
    params(("id" = i64, Path, description = "Label id")),
    responses(
        (status = 200, description = "The label", body = LabelResponse),
        (status = 404, description = "Label not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "labels"
)]
pub async fn label_show_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LabelResponse>, AppError> {
    let label = state.label_service.get_by_id(id).await?;
    Ok(Json(label.into()))
}

/// Creates a label.
///
/// # Endpoint
///
/// `POST /api/labels`
#[utoipa::path(
    post,
    path = "/api/labels",
    request_body = LabelCreateRequest,
    responses(
        (status = 201, description = "Created label", body = LabelResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Name already taken"),
    ),
    security(("bearer_auth" = [])),
    tag = "labels"
)]
pub async fn label_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<LabelCreateRequest>,
) -> Result<(StatusCode, Json<LabelResponse>), AppError> {
    payload.validate()?;

    let label = state.label_service.create(payload.into_new_label()).await?;

    Ok((StatusCode::CREATED, Json(label.into())))
}

/// Partially updates a label.
///
/// # Endpoint
///
/// `PUT /api/labels/{id}`
#[utoipa::path(
    put,
    path = "/api/labels/{id}",
    params(("id" = i64, Path, description = "Label id")),
    request_body = LabelUpdateRequest,
    responses(
        (status = 200, description = "Updated label", body = LabelResponse),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Label not found"),
        (status = 409, description = "Name already taken"),
    ),
    security(("bearer_auth" = [])),
    tag = "labels"
)]
pub async fn label_update_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<LabelUpdateRequest>,
) -> Result<Json<LabelResponse>, AppError> {
    payload.validate()?;

    let label = state.label_service.update(id, payload.into_patch()).await?;

    Ok(Json(label.into()))
}

/// Deletes a label.
///
/// # Endpoint
///
/// `DELETE /api/labels/{id}`
///
/// # Errors
///
/// Returns 400 when tasks still carry the label.
#[utoipa::path(
    delete,
    path = "/api/labels/{id}",
    params(("id" = i64, Path, description = "Label id")),
    responses(
        (status = 204, description = "Label deleted"),
        (status = 400, description = "Tasks still carry this label"),
        (status = 404, description = "Label not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "labels"
)]
pub async fn label_delete_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.label_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
