//! Renderable tree built from domain records
//!
//! The render surface never sees [`DomainRecord`]s directly. Each load or
//! search response is converted wholesale into [`TreeNode`]s, tagged as
//! selectable (single-select) or checkable (multi-select).

use serde::Serialize;

use crate::hierarchy::entity::DomainRecord;
use crate::hierarchy::ids::DomainId;

/// Selection mode of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    Single,
    Multiple,
}

impl SelectionMode {
    pub fn from_multiple(is_multiple: bool) -> Self {
        if is_multiple {
            Self::Multiple
        } else {
            Self::Single
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple)
    }
}

/// Icon drawn in front of a node label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeIcon {
    Domain,
    SubDomain,
}

/// One renderable element of the hierarchy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Fully-qualified name of the record
    pub key: String,
    pub id: DomainId,
    pub name: String,
    pub label: String,
    pub depth: usize,
    pub is_leaf: bool,
    pub selectable: bool,
    pub checkable: bool,
    pub icon: NodeIcon,
    pub test_id: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn from_record(record: &DomainRecord, depth: usize, mode: SelectionMode) -> Self {
        Self {
            key: record.fully_qualified_name.clone(),
            id: record.id,
            name: record.name.clone(),
            label: record.label().to_string(),
            depth,
            is_leaf: !record.has_children(),
            selectable: !mode.is_multiple(),
            checkable: mode.is_multiple(),
            icon: if depth == 0 {
                NodeIcon::Domain
            } else {
                NodeIcon::SubDomain
            },
            test_id: format!("tag-{}", record.fully_qualified_name),
            children: build_tree(&record.children, depth + 1, mode),
        }
    }
}

/// Convert a list of records into tree nodes starting at `depth`
pub fn build_tree(records: &[DomainRecord], depth: usize, mode: SelectionMode) -> Vec<TreeNode> {
    records
        .iter()
        .map(|record| TreeNode::from_record(record, depth, mode))
        .collect()
}

/// Every key of the tree, depth-first, parents before children
pub fn collect_keys(nodes: &[TreeNode]) -> Vec<String> {
    let mut keys = Vec::new();
    let mut stack: Vec<&TreeNode> = nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        keys.push(node.key.clone());
        stack.extend(node.children.iter().rev());
    }

    keys
}
