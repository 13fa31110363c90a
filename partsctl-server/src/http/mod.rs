//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - Pretty-printed JSON bodies, including errors

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use extractors::QueryParams;
pub use response::PrettyJson;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
