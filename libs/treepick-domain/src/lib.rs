//! # Treepick Domain Layer
//!
//! This crate contains the logic of a hierarchical selectable picker for
//! catalog domains. It follows hexagonal architecture principles:
//!
//! - **Entities**: domain records, tree nodes and entity references
//! - **Ports**: trait definitions for the hierarchy/search backend, the
//!   caller's submit/cancel callbacks and user-visible notifications
//! - **Services**: the [`DomainPicker`] state machine
//!
//! ## Architecture
//!
//! This layer has NO dependencies on HTTP clients, UI toolkits or storage.
//! The picker describes what to render through [`PickerView`] and talks to
//! the outside world only through its ports.
//!
//! ## Example
//!
//! ```rust,no_run
//! use treepick_domain::picker::{CheckEvent, DomainPicker, PickerProps};
//! use treepick_domain::ports::{HierarchySource, Notifier, SelectionHandler};
//!
//! async fn example<S, H, N>(source: S, handler: H, notifier: N)
//! where
//!     S: HierarchySource + 'static,
//!     H: SelectionHandler + 'static,
//!     N: Notifier + 'static,
//! {
//!     let props = PickerProps::multiple(vec![]);
//!     let picker = DomainPicker::with_ports(source, handler, notifier, props);
//!     picker.set_visible(true).await;
//!     picker.on_check(CheckEvent::Keys(vec!["finance".to_string()]));
//!     let selection = picker.save().await.unwrap();
//!     println!("Picked {} domains", selection.len());
//! }
//! ```

pub mod error;
pub mod hierarchy;
pub mod picker;
pub mod ports;
pub mod query;

// Re-export commonly used types
pub use error::{PickerError, Result};
pub use hierarchy::{DomainId, DomainRecord, EntityReference, EntityType, TreeNode};
pub use picker::{CheckEvent, DomainPicker, LoadOutcome, PickerConfig, PickerProps, PickerView};
pub use ports::{HierarchySource, Notifier, SelectionHandler};
