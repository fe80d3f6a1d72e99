//! Picker module
//!
//! The hierarchical selectable picker: configuration, selection state,
//! debounced search, render composition and the service tying them to the
//! ports.

mod config;
pub mod debounce;
pub mod selection;
pub mod service;
pub mod view;

pub use config::{PickerConfig, PickerProps};
pub use debounce::Debouncer;
pub use selection::{CheckEvent, SelectedKeys};
pub use service::{DomainPicker, LoadOutcome};
pub use view::{PickerView, SwitcherIcons, TreeView, EMPTY_MESSAGE};
