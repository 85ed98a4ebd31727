//! Database access layer for the portfolio backend.
//!
//! Provides the connection pool wrapper, embedded migrations, and row
//! models with type-safe query methods over PostgreSQL.

pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;

pub use error::DbError;
pub use migrations::run_migrations;
pub use pool::DbPool;
