/// API route handlers
///
/// Organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Registration and login (public)
/// - `users`: Profile read/update (bearer-protected)
/// - `tasks`: Owner-scoped task CRUD with search/filter (bearer-protected)

pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;
