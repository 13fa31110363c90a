//! Custom Axum extractors

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{Pagination, PaginationParams};

/// Raw query-string parameters. A repeated key keeps its last value.
///
/// Never rejects a request: an undecodable query string reads as empty, so
/// every parameter falls back to its default.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// `page` / `per_page`, clamped
    pub fn pagination(&self) -> Pagination {
        Pagination::from(PaginationParams {
            page: self.get("page").map(str::to_owned),
            per_page: self.get("per_page").map(str::to_owned),
        })
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<HashMap<String, String>>::from_request_parts(parts, state).await {
            Ok(Query(params)) => Ok(Self(params)),
            Err(e) => {
                tracing::debug!("Ignoring undecodable query string: {}", e);
                Ok(Self::default())
            }
        }
    }
}
