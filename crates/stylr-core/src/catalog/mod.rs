//! Catalog domain module.
//!
//! This module contains the catalog item model, the read-only store and the
//! built-in mock catalogs.
//!
//! # Module Structure
//!
//! - `model`: Item model (`CatalogItem`, `Money`, `AttributeValue`)
//! - `store`: Indexed read-only store
//! - `preset`: Fashion and car parts catalogs
//!
//! # Usage
//!
//! ```ignore
//! use stylr_core::catalog::{fashion_catalog, CatalogStore};
//! ```

mod model;
mod preset;
mod store;

// Re-export public API
pub use model::{AttributeValue, CatalogItem, Money};
pub use preset::{
    car_parts_catalog, fashion_catalog, vehicle_key, BMW_3SERIES, HONDA_CIVIC, TOYOTA_CAMRY,
};
pub use store::CatalogStore;
