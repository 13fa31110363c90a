//! Database layer - settings, connection pool, schema and the query catalog
//!
//! # Design Principles
//!
//! - One pool per process, injected into handlers (no global connection)
//! - Every catalog question is exactly one SQL statement
//! - SQL stays portable between PostgreSQL and SQLite (`$N` placeholders only)

pub mod pool;
pub mod repos;
pub mod schema;
pub mod settings;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
pub use settings::DbSettings;
