//! Request-side models: pagination, query-string filters, validation
//!
//! Query-string values are parsed leniently: numbers that do not parse count
//! as 0 and are then clamped; only the color whitelist can reject a request.

pub mod filters;
pub mod pagination;
pub mod validation;

pub use filters::{parse_int_prefix, ColorSet};
pub use pagination::{paginate, Page, PageMeta, Pagination, PaginationParams};
pub use validation::ValidationError;
