//! Infrastructure layer: database access and startup seeding.

pub mod persistence;
pub mod seed;
