//! Errors raised by the picker
//!
//! Every failure stays inside the picker. Collaborator failures are turned
//! into [`PickerError`] at the port boundary and surfaced to the user
//! through the [`Notifier`](crate::ports::Notifier) port.

use thiserror::Error;

/// Errors that can occur while loading, searching or saving a selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The hierarchy collaborator failed
    #[error("Failed to load domain hierarchy: {0}")]
    HierarchyLoad(String),

    /// The search collaborator failed
    #[error("Domain search failed: {0}")]
    Search(String),

    /// Selected keys that match no record in the loaded snapshots
    #[error("Selected domains could not be resolved: {}", keys.join(", "))]
    UnresolvedSelection { keys: Vec<String> },

    /// The caller's submit callback failed
    #[error("Failed to submit selection: {0}")]
    Submit(String),

    /// A save is already waiting on the submit callback
    #[error("A submission is already in progress")]
    SubmitInProgress,
}

impl PickerError {
    pub fn hierarchy_load(msg: impl Into<String>) -> Self {
        Self::HierarchyLoad(msg.into())
    }

    pub fn search_failure(msg: impl Into<String>) -> Self {
        Self::Search(msg.into())
    }

    pub fn unresolved(keys: Vec<String>) -> Self {
        Self::UnresolvedSelection { keys }
    }

    pub fn submit_failure(msg: impl Into<String>) -> Self {
        Self::Submit(msg.into())
    }
}

/// Result type alias for picker operations
pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_load_error() {
        let err = PickerError::hierarchy_load("connection refused");
        assert!(matches!(err, PickerError::HierarchyLoad(_)));
        assert_eq!(
            err.to_string(),
            "Failed to load domain hierarchy: connection refused"
        );
    }

    #[test]
    fn test_unresolved_selection_lists_keys() {
        let err = PickerError::unresolved(vec!["a.b".to_string(), "c".to_string()]);
        assert_eq!(
            err.to_string(),
            "Selected domains could not be resolved: a.b, c"
        );
    }

    #[test]
    fn test_search_failure_error() {
        let err = PickerError::search_failure("timeout");
        assert!(err.to_string().contains("Domain search failed"));
    }
}
