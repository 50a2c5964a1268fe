/// Database layer for Taskline
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with health checks
/// - `migrations`: Database migration runner
///
/// Models live in the `models` module at crate root level. The pool is the
/// only shared state between requests; everything else is per-request.

pub mod migrations;
pub mod pool;
