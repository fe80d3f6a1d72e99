//! Ports (trait definitions) for the picker's collaborators
//!
//! The picker owns no I/O. The hierarchy/search backend, the caller's
//! submit/cancel callbacks and the user-visible notification channel are
//! all injected through these traits.
//!
//! ## Static Dispatch
//!
//! Async operations use `impl Future` return types rather than boxed trait
//! objects, so each adapter is monomorphized into the picker.

use std::future::Future;

use crate::error::PickerError;
use crate::hierarchy::{DomainRecord, EntityReference};

/// Port for the remote hierarchy listing and search endpoints
///
/// Implementations must be side-effect free: the picker may call them
/// repeatedly and may discard a response that arrives after a newer one
/// was requested.
pub trait HierarchySource: Send + Sync {
    /// Return up to `limit` top-level domains with their sub-domains
    ///
    /// # Errors
    ///
    /// Returns `PickerError::HierarchyLoad` when the backend cannot be reached
    fn fetch_hierarchy(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<DomainRecord>, PickerError>> + Send;

    /// Return the domains matching an already escaped and encoded query
    ///
    /// Matches may be flat: nesting is not guaranteed to be preserved.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::Search` when the search backend fails
    fn search_hierarchy(
        &self,
        encoded_query: &str,
    ) -> impl Future<Output = Result<Vec<DomainRecord>, PickerError>> + Send;
}

/// Port for the caller's callbacks
pub trait SelectionHandler: Send + Sync {
    /// Receive the resolved selection; the picker stays busy until this completes
    fn submit(
        &self,
        selection: Vec<EntityReference>,
    ) -> impl Future<Output = Result<(), PickerError>> + Send;

    /// User dismissed the picker; nothing is reported
    fn cancel(&self);
}

/// Port for non-blocking, user-visible error notifications
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify_error(&self, error: &PickerError);
}
