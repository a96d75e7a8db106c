//! OpenAPI documentation configuration.
//!
//! Generates the machine-readable API description served at
//! `/api-docs/openapi.json` and rendered by Swagger UI at `/swagger-ui`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::dto::auth::LoginRequest;
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::api::dto::label::{LabelCreateRequest, LabelResponse, LabelUpdateRequest};
use crate::api::dto::task::{TaskCreateRequest, TaskResponse, TaskUpdateRequest};
use crate::api::dto::task_status::{
    TaskStatusCreateRequest, TaskStatusResponse, TaskStatusUpdateRequest,
};
use crate::api::dto::user::{UserCreateRequest, UserResponse, UserUpdateRequest};

/// Registers the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Token issued by POST /api/login"))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document covering every REST endpoint.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Task Tracker API",
        description = "Task management service with users, statuses, labels and filterable tasks."
    ),
    paths(
        crate::api::handlers::auth::login_handler,
        crate::api::handlers::health::health_handler,
        crate::api::handlers::users::user_list_handler,
        crate::api::handlers::users::user_show_handler,
        crate::api::handlers::users::user_create_handler,
        crate::api::handlers::users::user_update_handler,
        crate::api::handlers::users::user_delete_handler,
        crate::api::handlers::task_statuses::task_status_list_handler,
        crate::api::handlers::task_statuses::task_status_show_handler,
        crate::api::handlers::task_statuses::task_status_create_handler,
        crate::api::handlers::task_statuses::task_status_update_handler,
        crate::api::handlers::task_statuses::task_status_delete_handler,
        crate::api::handlers::labels::label_list_handler,
        crate::api::handlers::labels::label_show_handler,
        crate::api::handlers::labels::label_create_handler,
        crate::api::handlers::labels::label_update_handler,
        crate::api::handlers::labels::label_delete_handler,
        crate::api::handlers::tasks::task_list_handler,
        crate::api::handlers::tasks::task_show_handler,
        crate::api::handlers::tasks::task_create_handler,
        crate::api::handlers::tasks::task_update_handler,
        crate::api::handlers::tasks::task_delete_handler,
    ),
    components(schemas(
        LoginRequest,
        HealthResponse,
        HealthChecks,
        CheckStatus,
        UserCreateRequest,
        UserUpdateRequest,
        UserResponse,
        TaskStatusCreateRequest,
        TaskStatusUpdateRequest,
        TaskStatusResponse,
        LabelCreateRequest,
        LabelUpdateRequest,
        LabelResponse,
        TaskCreateRequest,
        TaskUpdateRequest,
        TaskResponse,
    )),
    tags(
        (name = "auth", description = "Credential exchange"),
        (name = "users", description = "User accounts"),
        (name = "task_statuses", description = "Workflow statuses"),
        (name = "labels", description = "Task labels"),
        (name = "tasks", description = "Tasks and filtering"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;
