//! # Treepick Catalog Adapter
//!
//! Implements the [`HierarchySource`](treepick_domain::ports::HierarchySource)
//! port over an in-memory catalog of domains loaded from a JSON document.

pub mod error;
pub mod infrastructure;

pub use error::CatalogError;
pub use infrastructure::JsonCatalog;
