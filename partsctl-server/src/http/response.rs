//! Response bodies and envelopes

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON response rendered with indentation.
///
/// serde_json leaves `/` and non-ASCII characters unescaped, so the body is
/// readable as-is in a browser or terminal.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!("Failed to serialize response: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("text/plain; charset=utf-8"),
                    )],
                    "an internal error occurred",
                )
                    .into_response()
            }
        }
    }
}

/// `{ "data": [...] }`
#[derive(Debug, Serialize)]
pub struct Listing<T> {
    pub data: Vec<T>,
}

/// Envelope echoing the effective filter: `{ "filtro": {...}, <body> }`
#[derive(Debug, Serialize)]
pub struct Filtered<F, B> {
    pub filtro: F,
    #[serde(flatten)]
    pub body: B,
}
