//! Health check handler.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports service health, probing the database with a trivial query.
///
/// # Endpoint
///
/// `GET /health`
///
/// Returns 200 with `"status": "healthy"` when all checks pass, 503 with
/// `"status": "degraded"` otherwise. Unauthenticated so load balancers
/// can poll it.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is degraded", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await
    {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Err(e) => {
            tracing::error!("Health check database probe failed: {e}");
            CheckStatus {
                status: "error".to_string(),
                message: Some(e.to_string()),
            }
        }
    };

    let healthy = database.status == "ok";
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database },
    };

    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
