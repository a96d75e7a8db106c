//! Shared helpers with no layer affiliation.

pub mod password;
