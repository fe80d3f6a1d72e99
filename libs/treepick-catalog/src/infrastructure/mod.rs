//! Catalog-backed implementations of the domain ports

mod json_catalog;

pub use json_catalog::JsonCatalog;
