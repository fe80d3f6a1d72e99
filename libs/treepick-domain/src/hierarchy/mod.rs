//! Hierarchy module
//!
//! The data model shared by the picker and its collaborators: raw domain
//! records, their renderable tree form, and lookups over nested records.

pub mod entity;
pub mod ids;
pub mod lookup;
pub mod tree;

pub use entity::{DomainRecord, EntityReference, EntityType};
pub use ids::DomainId;
pub use lookup::{collect_fqns, find_by_fqn};
pub use tree::{build_tree, collect_keys, NodeIcon, SelectionMode, TreeNode};
