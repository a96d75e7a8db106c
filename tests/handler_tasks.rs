mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_task_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (user_id, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    common::create_test_status(&pool, "Draft", "draft").await;
    let label_id = common::create_test_label(&pool, "bug").await;

    let response = server
        .post("/api/tasks")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Fix the build",
            "content": "CI is red since Monday",
            "status": "draft",
            "assignee_id": user_id,
            "taskLabelIds": [label_id]
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["title"], "Fix the build");
    assert_eq!(body["content"], "CI is red since Monday");
    assert_eq!(body["status"], "draft");
    assert_eq!(body["assignee_id"], user_id);
    assert_eq!(body["taskLabelIds"][0], label_id);
    assert!(body.get("createdAt").is_some());
}

#[sqlx::test]
async fn test_create_task_minimal(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    common::create_test_status(&pool, "Draft", "draft").await;

    let response = server
        .post("/api/tasks")
        .authorization_bearer(&token)
        .json(&json!({ "title": "Bare minimum", "status": "draft" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["assignee_id"], serde_json::Value::Null);
    assert_eq!(body["taskLabelIds"], json!([]));
}

#[sqlx::test]
async fn test_create_task_unknown_status(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;

    let response = server
        .post("/api/tasks")
        .authorization_bearer(&token)
        .json(&json!({ "title": "No such status", "status": "nope" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_create_task_unknown_label(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    common::create_test_status(&pool, "Draft", "draft").await;

    let response = server
        .post("/api/tasks")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Ghost label",
            "status": "draft",
            "taskLabelIds": [999999]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_create_task_unknown_assignee(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    common::create_test_status(&pool, "Draft", "draft").await;

    let response = server
        .post("/api/tasks")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Ghost assignee",
            "status": "draft",
            "assignee_id": 999999
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── SHOW ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_task_show_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let status_id = common::create_test_status(&pool, "Draft", "draft").await;
    let id = common::create_test_task(&pool, "Read me", status_id).await;

    let response = server
        .get(&format!("/api/tasks/{id}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["title"], "Read me");
    assert_eq!(body["status"], "draft");
}

#[sqlx::test]
async fn test_task_show_not_found(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;

    let response = server
        .get("/api/tasks/999999")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
}

// ─── LIST / FILTERS ──────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_tasks_list_unfiltered(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let status_id = common::create_test_status(&pool, "Draft", "draft").await;
    common::create_test_task(&pool, "First", status_id).await;
    common::create_test_task(&pool, "Second", status_id).await;

    let response = server.get("/api/tasks").authorization_bearer(&token).await;

    response.assert_status_ok();
    assert_eq!(response.headers().get("x-total-count").unwrap(), "2");
}

#[sqlx::test]
async fn test_tasks_filter_title_cont(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let status_id = common::create_test_status(&pool, "Draft", "draft").await;
    common::create_test_task(&pool, "Fix the build", status_id).await;
    common::create_test_task(&pool, "Write docs", status_id).await;

    let response = server
        .get("/api/tasks")
        .add_query_param("titleCont", "BUILD")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let tasks = response.json::<Vec<serde_json::Value>>();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Fix the build");
}

#[sqlx::test]
async fn test_tasks_filter_assignee(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (user_id, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let other_id = common::create_test_user(&pool, "other@example.com").await;
    let status_id = common::create_test_status(&pool, "Draft", "draft").await;
    common::create_assigned_task(&pool, "Mine", status_id, user_id).await;
    common::create_assigned_task(&pool, "Theirs", status_id, other_id).await;

    let response = server
        .get("/api/tasks")
        .add_query_param("assigneeId", user_id)
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let tasks = response.json::<Vec<serde_json::Value>>();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Mine");
}

#[sqlx::test]
async fn test_tasks_filter_status_case_insensitive(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let draft_id = common::create_test_status(&pool, "Draft", "draft").await;
    let done_id = common::create_test_status(&pool, "Done", "done").await;
    common::create_test_task(&pool, "Pending", draft_id).await;
    common::create_test_task(&pool, "Finished", done_id).await;

    let response = server
        .get("/api/tasks")
        .add_query_param("status", "DONE")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let tasks = response.json::<Vec<serde_json::Value>>();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Finished");
}

#[sqlx::test]
async fn test_tasks_filter_label(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let status_id = common::create_test_status(&pool, "Draft", "draft").await;
    let bug_id = common::create_test_label(&pool, "bug").await;
    let tagged = common::create_test_task(&pool, "Tagged", status_id).await;
    common::create_test_task(&pool, "Untagged", status_id).await;
    common::attach_label(&pool, tagged, bug_id).await;

    let response = server
        .get("/api/tasks")
        .add_query_param("labelId", bug_id)
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let tasks = response.json::<Vec<serde_json::Value>>();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Tagged");
}

#[sqlx::test]
async fn test_tasks_filters_combine_with_and(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (user_id, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let status_id = common::create_test_status(&pool, "Draft", "draft").await;
    common::create_assigned_task(&pool, "Fix the build", status_id, user_id).await;
    common::create_test_task(&pool, "Fix the tests", status_id).await;

    let response = server
        .get("/api/tasks")
        .add_query_param("titleCont", "fix")
        .add_query_param("assigneeId", user_id)
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let tasks = response.json::<Vec<serde_json::Value>>();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Fix the build");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_task_title_only(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (user_id, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let status_id = common::create_test_status(&pool, "Draft", "draft").await;
    let id = common::create_assigned_task(&pool, "Old title", status_id, user_id).await;

    let response = server
        .put(&format!("/api/tasks/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "title": "New title" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["title"], "New title");
    // Untouched fields survive the partial update.
    assert_eq!(body["status"], "draft");
    assert_eq!(body["assignee_id"], user_id);
}

#[sqlx::test]
async fn test_update_task_null_clears_assignee(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (user_id, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let status_id = common::create_test_status(&pool, "Draft", "draft").await;
    let id = common::create_assigned_task(&pool, "Assigned", status_id, user_id).await;

    let response = server
        .put(&format!("/api/tasks/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "assignee_id": null }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["assignee_id"],
        serde_json::Value::Null
    );
}

#[sqlx::test]
async fn test_update_task_replaces_label_set(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let status_id = common::create_test_status(&pool, "Draft", "draft").await;
    let bug_id = common::create_test_label(&pool, "bug").await;
    let feature_id = common::create_test_label(&pool, "feature").await;
    let id = common::create_test_task(&pool, "Relabel me", status_id).await;
    common::attach_label(&pool, id, bug_id).await;

    let response = server
        .put(&format!("/api/tasks/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "taskLabelIds": [feature_id] }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["taskLabelIds"],
        json!([feature_id])
    );
}

#[sqlx::test]
async fn test_update_task_status_change(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let draft_id = common::create_test_status(&pool, "Draft", "draft").await;
    common::create_test_status(&pool, "Done", "done").await;
    let id = common::create_test_task(&pool, "Moving on", draft_id).await;

    let response = server
        .put(&format!("/api/tasks/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "status": "done" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "done");
}

#[sqlx::test]
async fn test_update_task_not_found(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;

    let response = server
        .put("/api/tasks/999999")
        .authorization_bearer(&token)
        .json(&json!({ "title": "Ghost" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_task_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;
    let status_id = common::create_test_status(&pool, "Draft", "draft").await;
    let id = common::create_test_task(&pool, "Short-lived", status_id).await;

    server
        .delete(&format!("/api/tasks/{id}"))
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/tasks/{id}"))
        .authorization_bearer(&token)
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_task_not_found(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = common::make_server(state.clone());

    let (_, token) = common::authenticated_user(&state, &pool, "jane@example.com").await;

    let response = server
        .delete("/api/tasks/999999")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
}
