//! Service descriptor

use axum::{routing::get, Router};
use serde::Serialize;

use crate::http::response::PrettyJson;

/// Catalog routes, in question order
pub const ENDPOINTS: [&str; 10] = [
    "/1", "/2", "/3", "/4", "/5", "/6", "/7", "/8", "/9", "/10",
];

/// Descriptor response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: &'static [&'static str],
}

/// GET /
async fn index() -> PrettyJson<IndexResponse> {
    PrettyJson(IndexResponse {
        message: "API FornitoriPezziDB attiva",
        endpoints: &ENDPOINTS,
    })
}

/// Descriptor routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
