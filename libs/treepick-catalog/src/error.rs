//! Errors raised while loading a catalog

use std::path::PathBuf;

use thiserror::Error;
use treepick_domain::PickerError;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not a valid list of domains
    #[error("Invalid catalog document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// Two records share a fully-qualified name
    #[error("Duplicate fully-qualified name '{0}' in catalog")]
    DuplicateFqn(String),

    /// The search query could not be decoded
    #[error("Malformed search query: {0}")]
    MalformedQuery(String),
}

impl From<CatalogError> for PickerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MalformedQuery(_) => PickerError::search_failure(err.to_string()),
            other => PickerError::hierarchy_load(other.to_string()),
        }
    }
}
