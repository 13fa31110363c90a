//! Command implementations for partsctl CLI

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

use partsctl_server::db::DbSettings;

/// Database URL from the flag (or `DATABASE_URL`), else assembled from `DB_*`.
///
/// Only the credential-free part of an assembled URL is logged.
pub(crate) fn resolve_database_url(flag: Option<String>) -> String {
    match flag {
        Some(url) => {
            tracing::info!("Using database from --database-url / DATABASE_URL");
            url
        }
        None => {
            let settings = DbSettings::from_env();
            tracing::info!("Using database {}", settings.describe());
            settings.url()
        }
    }
}
