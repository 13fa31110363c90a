//! Database connection pool management
//!
//! Uses a sqlx `AnyPool` so the same catalog runs on PostgreSQL in
//! production and on in-memory SQLite in tests and demo mode.

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

/// Default maximum connections for the pool.
/// Kept low; every request runs a single read query.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a connection pool for the given database URL.
///
/// # Errors
///
/// Returns an error if the store is unreachable or rejects the credentials.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/FornitoriPezziDB").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<AnyPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - connection string (`postgres://...` or `sqlite:...`)
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Create a single-connection in-memory SQLite pool.
///
/// Every SQLite connection to `:memory:` is its own database, so the pool
/// holds exactly one connection and never recycles it.
pub async fn create_memory_pool() -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    AnyPoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}
