//! DTOs for the health check endpoint.

use serde::Serialize;
use utoipa::ToSchema;

/// Overall service health report.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Per-component check results.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Result of a single component check.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckStatus {
    /// `ok` or `error`.
    pub status: String,
    pub message: Option<String>,
}
