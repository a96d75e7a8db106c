//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization, validator for
//! input validation, and utoipa for OpenAPI schema generation. Mapping
//! between wire shapes and domain entities lives next to each DTO.

pub mod auth;
pub mod health;
pub mod label;
pub mod task;
pub mod task_status;
pub mod user;
