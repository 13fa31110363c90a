//! Row types returned by the catalog queries
//!
//! Serialized keys keep the schema's column names (`fid`, `pnome`, ...).

use serde::Serialize;
use sqlx::FromRow;

/// Supplier record (`Fornitori`)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Supplier {
    #[sqlx(rename = "fid")]
    #[serde(rename = "fid")]
    pub id: String,
    #[sqlx(rename = "fnome")]
    #[serde(rename = "fnome")]
    pub name: String,
    #[sqlx(rename = "indirizzo")]
    #[serde(rename = "indirizzo")]
    pub address: Option<String>,
}

/// Part record (`Pezzi`)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Part {
    #[sqlx(rename = "pid")]
    #[serde(rename = "pid")]
    pub id: String,
    #[sqlx(rename = "pnome")]
    #[serde(rename = "pnome")]
    pub name: String,
    #[sqlx(rename = "colore")]
    #[serde(rename = "colore")]
    pub color: String,
}

/// A catalog offer priced at the minimum for its part
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CheapestOffer {
    #[sqlx(rename = "pid")]
    #[serde(rename = "pid")]
    pub part_id: String,
    #[sqlx(rename = "pnome")]
    #[serde(rename = "pnome")]
    pub part_name: String,
    #[sqlx(rename = "colore")]
    #[serde(rename = "colore")]
    pub color: String,
    #[sqlx(rename = "fid")]
    #[serde(rename = "fid")]
    pub supplier_id: String,
    #[sqlx(rename = "fnome")]
    #[serde(rename = "fnome")]
    pub supplier_name: String,
    #[sqlx(rename = "costo")]
    #[serde(rename = "costo")]
    pub price: f64,
}

/// Supplier carrying both red and green parts, with the distinct count of each
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct RedGreenSupplier {
    #[sqlx(rename = "fid")]
    #[serde(rename = "fid")]
    pub id: String,
    #[sqlx(rename = "fnome")]
    #[serde(rename = "fnome")]
    pub name: String,
    #[sqlx(rename = "indirizzo")]
    #[serde(rename = "indirizzo")]
    pub address: Option<String>,
    #[sqlx(rename = "pezzi_rossi")]
    #[serde(rename = "pezzi_rossi")]
    pub red_parts: i64,
    #[sqlx(rename = "pezzi_verdi")]
    #[serde(rename = "pezzi_verdi")]
    pub green_parts: i64,
}

/// Part annotated with the number of distinct suppliers offering it
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PartSupplierCount {
    #[sqlx(rename = "pid")]
    #[serde(rename = "pid")]
    pub id: String,
    #[sqlx(rename = "pnome")]
    #[serde(rename = "pnome")]
    pub name: String,
    #[sqlx(rename = "colore")]
    #[serde(rename = "colore")]
    pub color: String,
    #[sqlx(rename = "num_fornitori")]
    #[serde(rename = "num_fornitori")]
    pub supplier_count: i64,
}
