//! Part-centric catalog questions: /1, /4, /6, /10

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use serde::Serialize;

use crate::db::{CheapestOffer, Part, PartSupplierCount};
use crate::http::error::ApiError;
use crate::http::extractors::QueryParams;
use crate::http::response::{Filtered, Listing, PrettyJson};
use crate::http::server::AppState;
use crate::models::filters::{min_suppliers, trimmed_or, DEFAULT_SUPPLIER_NAME};
use crate::models::{paginate, Page};

/// Effective supplier name echoed by /4
#[derive(Debug, Serialize)]
pub struct SupplierNameFilter {
    pub fnome: String,
}

/// Effective threshold echoed by /10
#[derive(Debug, Serialize)]
pub struct MinSuppliersFilter {
    pub min_fornitori: i64,
}

/// GET /1 - distinct parts present in at least one catalog
async fn cataloged_parts(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<PrettyJson<Page<Part>>, ApiError> {
    let rows = state.catalog.cataloged_parts().await?;
    Ok(PrettyJson(paginate(rows, params.pagination())))
}

/// GET /4 - parts sold only by the named supplier
async fn exclusive_parts(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<PrettyJson<Filtered<SupplierNameFilter, Listing<Part>>>, ApiError> {
    let fnome = trimmed_or(params.get("fnome"), DEFAULT_SUPPLIER_NAME);
    let data = state.catalog.parts_exclusive_to(&fnome).await?;

    Ok(PrettyJson(Filtered {
        filtro: SupplierNameFilter { fnome },
        body: Listing { data },
    }))
}

/// GET /6 - cheapest supplier(s) for every part
async fn cheapest_offers(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<PrettyJson<Page<CheapestOffer>>, ApiError> {
    let rows = state.catalog.cheapest_offers().await?;
    Ok(PrettyJson(paginate(rows, params.pagination())))
}

/// GET /10 - parts offered by at least N distinct suppliers
async fn widely_supplied_parts(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<PrettyJson<Filtered<MinSuppliersFilter, Page<PartSupplierCount>>>, ApiError> {
    let min_fornitori = min_suppliers(params.get("min_fornitori"));
    let rows = state.catalog.parts_with_min_suppliers(min_fornitori).await?;

    Ok(PrettyJson(Filtered {
        filtro: MinSuppliersFilter { min_fornitori },
        body: paginate(rows, params.pagination()),
    }))
}

/// Part routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/1", get(cataloged_parts))
        .route("/4", get(exclusive_parts))
        .route("/6", get(cheapest_offers))
        .route("/10", get(widely_supplied_parts))
}
