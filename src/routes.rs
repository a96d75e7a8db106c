//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`           - Health check: DB probe (public)
//! - `POST /api/login`       - Credential exchange (public)
//! - `POST /api/users`       - Account registration (public)
//! - `/api/*`                - REST API (Bearer token required)
//! - `/swagger-ui`           - Interactive API documentation
//! - `/api-docs/openapi.json` - Machine-readable API description
//! - `/`                     - Welcome page
//! - `/assets/*`             - Static frontend assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on protected API routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::api::openapi::ApiDoc;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Constructs the application router with all routes and middleware.
///
/// Shared application state is injected into all handlers via `state`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .merge(api::routes::public_routes());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route_service("/", ServeFile::new("static/index.html"))
        .nest_service("/assets", ServeDir::new("static/assets"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
