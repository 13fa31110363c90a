//! Supplier-centric catalog questions: /2, /3, /5, /7, /8, /9

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use serde::Serialize;

use crate::db::{RedGreenSupplier, Supplier};
use crate::http::error::ApiError;
use crate::http::extractors::QueryParams;
use crate::http::response::{Filtered, Listing, PrettyJson};
use crate::http::server::AppState;
use crate::models::filters::{trimmed_or, DEFAULT_COLOR, DEFAULT_COLOR_LIST};
use crate::models::{paginate, ColorSet, Page};

/// Color whose suppliers /7 reports
const MONO_COLOR: &str = "rosso";

/// Effective color echoed by /3
#[derive(Debug, Serialize)]
pub struct ColorFilter {
    pub colore: String,
}

/// Effective color set echoed by /9
#[derive(Debug, Serialize)]
pub struct ColorListFilter {
    pub colori: ColorSet,
}

/// GET /2 - suppliers carrying every part
async fn universal_suppliers(
    State(state): State<Arc<AppState>>,
) -> Result<PrettyJson<Listing<Supplier>>, ApiError> {
    let data = state.catalog.universal_suppliers().await?;
    Ok(PrettyJson(Listing { data }))
}

/// GET /3 - suppliers carrying every part of one color
async fn color_universal_suppliers(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<PrettyJson<Filtered<ColorFilter, Listing<Supplier>>>, ApiError> {
    let colore = trimmed_or(params.get("colore"), DEFAULT_COLOR);
    let data = state.catalog.color_universal_suppliers(&colore).await?;

    Ok(PrettyJson(Filtered {
        filtro: ColorFilter { colore },
        body: Listing { data },
    }))
}

/// GET /5 - suppliers pricing some part above its average
async fn above_average_suppliers(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<PrettyJson<Page<Supplier>>, ApiError> {
    let rows = state.catalog.suppliers_above_part_average().await?;
    Ok(PrettyJson(paginate(rows, params.pagination())))
}

/// GET /7 - suppliers selling only red parts
async fn red_only_suppliers(
    State(state): State<Arc<AppState>>,
) -> Result<PrettyJson<Listing<Supplier>>, ApiError> {
    let data = state.catalog.mono_color_suppliers(MONO_COLOR).await?;
    Ok(PrettyJson(Listing { data }))
}

/// GET /8 - suppliers selling both red and green parts
async fn red_and_green_suppliers(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<PrettyJson<Page<RedGreenSupplier>>, ApiError> {
    let rows = state.catalog.red_and_green_suppliers().await?;
    Ok(PrettyJson(paginate(rows, params.pagination())))
}

/// GET /9 - suppliers selling any part in the color set
async fn suppliers_by_colors(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<PrettyJson<Filtered<ColorListFilter, Page<Supplier>>>, ApiError> {
    let colori = ColorSet::parse(params.get("colori").unwrap_or(DEFAULT_COLOR_LIST))?;
    let rows = state.catalog.suppliers_with_any_color(&colori).await?;

    Ok(PrettyJson(Filtered {
        filtro: ColorListFilter { colori },
        body: paginate(rows, params.pagination()),
    }))
}

/// Supplier routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/2", get(universal_suppliers))
        .route("/3", get(color_universal_suppliers))
        .route("/5", get(above_average_suppliers))
        .route("/7", get(red_only_suppliers))
        .route("/8", get(red_and_green_suppliers))
        .route("/9", get(suppliers_by_colors))
}
