//! partsctl-server: read-only query catalog over the suppliers/parts schema
//!
//! Three tables (`Fornitori`, `Pezzi`, `Catalogo`) and ten fixed analytical
//! questions about them, each exposed as one JSON route.
//!
//! - [`db`]: connection settings, pool, schema/fixture, and the [`db::SupplyCatalog`] trait
//! - [`models`]: pagination, query-string filters, validation errors
//! - [`http`]: axum router, handlers, and error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, SqlCatalog, SupplyCatalog};
pub use http::{build_router, run_server, AppState, ServerConfig};
