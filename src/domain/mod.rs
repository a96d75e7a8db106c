//! Core business entities and repository abstractions.
//!
//! This layer has no dependencies on HTTP or database specifics.

pub mod entities;
pub mod repositories;
