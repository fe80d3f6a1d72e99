//! JSON Catalog Implementation
//!
//! This module implements the `HierarchySource` port over a catalog of
//! domains held in memory. The catalog is loaded once from a JSON array of
//! nested domain records (the same camelCase shape the catalog API serves).

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use treepick_domain::{
    hierarchy::DomainRecord, ports::HierarchySource, query::unescape_reserved, PickerError,
};

use crate::error::CatalogError;

/// In-memory implementation of the HierarchySource port
///
/// Cloning is cheap; clones share the same immutable catalog.
///
/// ## Search
///
/// Queries arrive escaped and percent-encoded. The catalog decodes them and
/// matches case-insensitively against name, display name and fully-qualified
/// name at every nesting level. Matches are returned flat, without children.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    records: Arc<Vec<DomainRecord>>,
}

impl JsonCatalog {
    /// Create a catalog from already parsed records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateFqn` if two records share a
    /// fully-qualified name at any depth.
    pub fn new(records: Vec<DomainRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut stack: Vec<&DomainRecord> = records.iter().collect();
        while let Some(record) = stack.pop() {
            if !seen.insert(record.fully_qualified_name.as_str()) {
                return Err(CatalogError::DuplicateFqn(
                    record.fully_qualified_name.clone(),
                ));
            }
            stack.extend(record.children.iter());
        }

        info!(domains = seen.len(), "Initializing JsonCatalog");
        Ok(Self {
            records: Arc::new(records),
        })
    }

    /// Parse a catalog from a JSON array of domain records
    ///
    /// # Example
    ///
    /// ```rust
    /// use treepick_catalog::JsonCatalog;
    ///
    /// let catalog = JsonCatalog::from_json_str(r#"[
    ///     { "id": "0192e0c4-7d1a-7c3e-9a4f-1b2c3d4e5f60", "name": "sales", "fullyQualifiedName": "sales" }
    /// ]"#).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<DomainRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Read and parse a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading catalog file");
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Number of top-level domains
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn decode_query(encoded: &str) -> Result<String, CatalogError> {
        let decoded = urlencoding::decode(encoded)
            .map_err(|err| CatalogError::MalformedQuery(err.to_string()))?;
        Ok(unescape_reserved(&decoded))
    }

    fn matches(record: &DomainRecord, needle: &str) -> bool {
        [
            Some(record.name.as_str()),
            record.display_name.as_deref(),
            Some(record.fully_qualified_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
    }

    fn search(&self, needle: &str) -> Vec<DomainRecord> {
        let mut found = Vec::new();
        let mut stack: Vec<&DomainRecord> = self.records.iter().rev().collect();
        while let Some(record) = stack.pop() {
            if Self::matches(record, needle) {
                found.push(record.without_children());
            }
            stack.extend(record.children.iter().rev());
        }
        found
    }
}

impl HierarchySource for JsonCatalog {
    #[instrument(skip(self))]
    fn fetch_hierarchy(
        &self,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<DomainRecord>, PickerError>> + Send {
        let page: Vec<DomainRecord> = self.records.iter().take(limit).cloned().collect();
        debug!(returned = page.len(), total = self.records.len(), "Serving hierarchy page");

        async move { Ok(page) }
    }

    #[instrument(skip(self))]
    fn search_hierarchy(
        &self,
        encoded_query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<DomainRecord>, PickerError>> + Send {
        let result = match Self::decode_query(encoded_query) {
            Ok(query) => {
                let found = self.search(&query.to_lowercase());
                debug!(query = %query, matches = found.len(), "Catalog search complete");
                Ok(found)
            }
            Err(err) => {
                warn!(error = %err, "Rejecting search query");
                Err(PickerError::from(err))
            }
        };

        async move { result }
    }
}
