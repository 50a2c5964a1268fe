//! # Taskline Shared Library
//!
//! This crate contains the types and business logic shared between the
//! Taskline API server and its tooling.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `auth`: JWT tokens and Argon2id password hashing
//! - `db`: Connection pool and migration runner
//! - `validation`: The shared field-constraint contract

pub mod auth;
pub mod db;
pub mod models;
pub mod validation;

/// Current version of the Taskline shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
