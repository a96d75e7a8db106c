//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.
//! List handlers set the `X-Total-Count` header so clients can render
//! collection sizes without a separate count request.

pub mod auth;
pub mod health;
pub mod labels;
pub mod task_statuses;
pub mod tasks;
pub mod users;

pub use auth::login_handler;
pub use health::health_handler;

/// Header carrying the collection size on list responses.
pub const X_TOTAL_COUNT: &str = "x-total-count";
