//! Query catalog over the suppliers/parts schema
//!
//! [`SupplyCatalog`] is the capability handed to HTTP handlers;
//! [`SqlCatalog`] answers it with one SQL statement per question.

pub mod catalog;
pub mod rows;

pub use catalog::{SqlCatalog, SupplyCatalog};
pub use rows::{CheapestOffer, Part, PartSupplierCount, RedGreenSupplier, Supplier};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
