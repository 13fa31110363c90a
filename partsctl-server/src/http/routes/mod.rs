//! Route handlers organized by resource
//!
//! Catalog routes keep their numeric paths (`/1` .. `/10`).

pub mod health;
pub mod index;
pub mod parts;
pub mod suppliers;
