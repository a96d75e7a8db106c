mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

// ─── LIST / SHOW ─────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_statuses_list_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    common::create_test_status(&pool, "Draft", "draft").await;
    common::create_test_status(&pool, "Published", "published").await;

    let response = server
        .get("/api/task_statuses")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    assert_eq!(response.headers().get("x-total-count").unwrap(), "2");

    let statuses = response.json::<Vec<serde_json::Value>>();
    assert_eq!(statuses[0]["name"], "Draft");
    assert_eq!(statuses[0]["slug"], "draft");
}

#[sqlx::test]
async fn test_status_show_not_found(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;

    let response = server
        .get("/api/task_statuses/999999")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_status_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;

    let response = server
        .post("/api/task_statuses")
        .authorization_bearer(&token)
        .json(&json!({ "name": "In Review", "slug": "in_review" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "In Review");
    assert_eq!(body["slug"], "in_review");
    assert!(body.get("id").is_some());
    assert!(body.get("createdAt").is_some());
}

#[sqlx::test]
async fn test_create_status_duplicate_slug(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    common::create_test_status(&pool, "Draft", "draft").await;

    let response = server
        .post("/api/task_statuses")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Another Draft", "slug": "draft" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_create_status_empty_name_rejected(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;

    let response = server
        .post("/api/task_statuses")
        .authorization_bearer(&token)
        .json(&json!({ "name": "", "slug": "empty" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_create_status_requires_token(pool: PgPool) {
    let server = common::make_server(common::create_test_state(pool));

    let response = server
        .post("/api/task_statuses")
        .json(&json!({ "name": "Draft", "slug": "draft" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_status_partial(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let id = common::create_test_status(&pool, "Draft", "draft").await;

    let response = server
        .put(&format!("/api/task_statuses/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "name": "Early Draft" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Early Draft");
    // Untouched field keeps its value.
    assert_eq!(body["slug"], "draft");
}

#[sqlx::test]
async fn test_update_status_not_found(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;

    let response = server
        .put("/api/task_statuses/999999")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Ghost" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_status_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let id = common::create_test_status(&pool, "Draft", "draft").await;

    let response = server
        .delete(&format!("/api/task_statuses/{id}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[sqlx::test]
async fn test_delete_status_in_use_rejected(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let id = common::create_test_status(&pool, "Draft", "draft").await;
    common::create_test_task(&pool, "Uses the status", id).await;

    let response = server
        .delete(&format!("/api/task_statuses/{id}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_delete_status_not_found(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;

    let response = server
        .delete("/api/task_statuses/999999")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
}
