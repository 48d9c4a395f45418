//! # Domain Services
//!
//! - [`PriceCatalog`]: fixed in-memory vehicle price catalog

pub mod price_catalog;

pub use price_catalog::{CATALOG_SIZE, PriceCatalog};
