//! API route configuration.
//!
//! All routes under [`protected_routes`] require Bearer token
//! authentication via [`crate::api::middleware::auth`]. Login and user
//! registration stay public so new accounts can bootstrap themselves.

use crate::api::handlers::{
    labels::{
        label_create_handler, label_delete_handler, label_list_handler, label_show_handler,
        label_update_handler,
    },
    login_handler,
    task_statuses::{
        task_status_create_handler, task_status_delete_handler, task_status_list_handler,
        task_status_show_handler, task_status_update_handler,
    },
    tasks::{
        task_create_handler, task_delete_handler, task_list_handler, task_show_handler,
        task_update_handler,
    },
    users::{
        user_create_handler, user_delete_handler, user_list_handler, user_show_handler,
        user_update_handler,
    },
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `POST /login` - Exchange credentials for a bearer token
/// - `POST /users` - Register a new account
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/users", post(user_create_handler))
}

/// All CRUD routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /users`               - List users
/// - `GET    /users/{id}`          - Show a user
/// - `PUT    /users/{id}`          - Update a user (owner only)
/// - `DELETE /users/{id}`          - Delete a user (owner only)
/// - `GET    /task_statuses`       - List task statuses
/// - `POST   /task_statuses`       - Create a task status
/// - `GET    /task_statuses/{id}`  - Show a task status
/// - `PUT    /task_statuses/{id}`  - Update a task status
/// - `DELETE /task_statuses/{id}`  - Delete a task status
/// - `GET    /labels`              - List labels
/// - `POST   /labels`              - Create a label
/// - `GET    /labels/{id}`         - Show a label
/// - `PUT    /labels/{id}`         - Update a label
/// - `DELETE /labels/{id}`         - Delete a label
/// - `GET    /tasks`               - List tasks (filterable)
/// - `POST   /tasks`               - Create a task
/// - `GET    /tasks/{id}`          - Show a task
/// - `PUT    /tasks/{id}`          - Update a task
/// - `DELETE /tasks/{id}`          - Delete a task
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(user_list_handler))
        .route(
            "/users/{id}",
            get(user_show_handler)
                .put(user_update_handler)
                .delete(user_delete_handler),
        )
        .route(
            "/task_statuses",
            get(task_status_list_handler).post(task_status_create_handler),
        )
        .route(
            "/task_statuses/{id}",
            get(task_status_show_handler)
                .put(task_status_update_handler)
                .delete(task_status_delete_handler),
        )
        .route("/labels", get(label_list_handler).post(label_create_handler))
        .route(
            "/labels/{id}",
            get(label_show_handler)
                .put(label_update_handler)
                .delete(label_delete_handler),
        )
        .route("/tasks", get(task_list_handler).post(task_create_handler))
        .route(
            "/tasks/{id}",
            get(task_show_handler)
                .put(task_update_handler)
                .delete(task_delete_handler),
        )
}
