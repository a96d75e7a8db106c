#![allow(dead_code)]

use axum::{Router, middleware};
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use task_tracker::api::middleware::auth;
use task_tracker::api::routes::{protected_routes, public_routes};
use task_tracker::state::AppState;
use task_tracker::utils::password::hash_password;

pub const TEST_PASSWORD: &str = "qwerty";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), "test-signing-secret".to_string(), 3600)
}

/// Builds a test server mounting the API exactly as the application does:
/// public routes open, everything else behind the bearer token middleware.
pub fn make_server(state: AppState) -> TestServer {
    let api = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .merge(public_routes());

    let app = Router::new().nest("/api", api).with_state(state);

    TestServer::new(app).unwrap()
}

/// Inserts a user with [`TEST_PASSWORD`] and returns its id.
pub async fn create_test_user(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, password_digest) VALUES ($1, $2) RETURNING id",
    )
    .bind(email)
    .bind(hash_password(TEST_PASSWORD))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_status(pool: &PgPool, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO task_statuses (name, slug) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(slug)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_label(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO labels (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_task(pool: &PgPool, name: &str, status_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO tasks (name, status_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(status_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_assigned_task(
    pool: &PgPool,
    name: &str,
    status_id: i64,
    assignee_id: i64,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO tasks (name, status_id, assignee_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(status_id)
    .bind(assignee_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn attach_label(pool: &PgPool, task_id: i64, label_id: i64) {
    sqlx::query("INSERT INTO task_labels (task_id, label_id) VALUES ($1, $2)")
        .bind(task_id)
        .bind(label_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Creates a user and returns a token the auth middleware accepts for it.
pub async fn authenticated_user(state: &AppState, pool: &PgPool, email: &str) -> (i64, String) {
    let id = create_test_user(pool, email).await;
    let token = state.auth_service.issue_token(email).unwrap();
    (id, token)
}
