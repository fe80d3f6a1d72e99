//! Render composition
//!
//! The picker is headless: instead of drawing, it describes what the render
//! surface should show. Exactly one of three states applies at a time.

use serde::Serialize;

use crate::hierarchy::{SelectionMode, TreeNode};

/// Message shown when there is nothing to pick from
pub const EMPTY_MESSAGE: &str = "No Domain available";

/// Glyphs for the expand/collapse switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwitcherIcons {
    pub expanded: char,
    pub collapsed: char,
}

impl Default for SwitcherIcons {
    fn default() -> Self {
        Self {
            expanded: '▾',
            collapsed: '▸',
        }
    }
}

impl SwitcherIcons {
    pub fn glyph(&self, expanded: bool) -> char {
        if expanded {
            self.expanded
        } else {
            self.collapsed
        }
    }
}

/// Everything the tree surface needs to render the interactive tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeView {
    pub nodes: Vec<TreeNode>,
    pub block_node: bool,
    /// Checking a node never cascades to ancestors or descendants
    pub check_strictly: bool,
    pub default_expand_all: bool,
    pub show_line: bool,
    pub auto_expand_parent: bool,
    pub checkable: bool,
    pub multiple: bool,
    pub default_checked_keys: Vec<String>,
    pub default_expanded_keys: Vec<String>,
    pub default_selected_keys: Vec<String>,
    pub switcher: SwitcherIcons,
}

/// What the picker body shows right now
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PickerView {
    Loading,
    Empty { message: String },
    Tree(TreeView),
}

impl PickerView {
    /// Choose the render state from the current picker state
    ///
    /// `seed` is the caller's initial value; the default key sets derive
    /// from it and nothing else.
    pub fn compose(
        loading: bool,
        nodes: &[TreeNode],
        search_term: &str,
        mode: SelectionMode,
        seed: &[String],
    ) -> Self {
        if loading {
            return Self::Loading;
        }
        if nodes.is_empty() {
            return Self::Empty {
                message: EMPTY_MESSAGE.to_string(),
            };
        }

        let multiple = mode.is_multiple();
        Self::Tree(TreeView {
            nodes: nodes.to_vec(),
            block_node: true,
            check_strictly: true,
            default_expand_all: true,
            show_line: true,
            auto_expand_parent: !search_term.is_empty(),
            checkable: multiple,
            multiple,
            default_checked_keys: if multiple { seed.to_vec() } else { Vec::new() },
            default_expanded_keys: seed.to_vec(),
            default_selected_keys: if multiple { Vec::new() } else { seed.to_vec() },
            switcher: SwitcherIcons::default(),
        })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn tree(&self) -> Option<&TreeView> {
        match self {
            Self::Tree(view) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::{build_tree, DomainRecord};

    fn nodes(mode: SelectionMode) -> Vec<TreeNode> {
        build_tree(&[DomainRecord::new("a", "a")], 0, mode)
    }

    fn seed() -> Vec<String> {
        vec!["a".to_string()]
    }

    #[test]
    fn test_loading_masks_tree() {
        let view = PickerView::compose(
            true,
            &nodes(SelectionMode::Single),
            "",
            SelectionMode::Single,
            &[],
        );
        assert!(view.is_loading());
    }

    #[test]
    fn test_empty_state_when_no_nodes() {
        let view = PickerView::compose(false, &[], "", SelectionMode::Single, &[]);
        assert_eq!(
            view,
            PickerView::Empty {
                message: EMPTY_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_single_mode_tree_configuration() {
        let mode = SelectionMode::Single;
        let view = PickerView::compose(false, &nodes(mode), "", mode, &seed());
        let tree = view.tree().unwrap();

        assert!(tree.block_node && tree.check_strictly);
        assert!(tree.default_expand_all && tree.show_line);
        assert!(!tree.checkable);
        assert!(!tree.multiple);
        assert!(!tree.auto_expand_parent);
        assert!(tree.default_checked_keys.is_empty());
        assert_eq!(tree.default_selected_keys, seed());
        assert_eq!(tree.default_expanded_keys, seed());
    }

    #[test]
    fn test_multiple_mode_tree_configuration() {
        let mode = SelectionMode::Multiple;
        let view = PickerView::compose(false, &nodes(mode), "fin", mode, &seed());
        let tree = view.tree().unwrap();

        assert!(tree.checkable);
        assert!(tree.multiple);
        assert!(tree.auto_expand_parent);
        assert_eq!(tree.default_checked_keys, seed());
        assert!(tree.default_selected_keys.is_empty());
    }

    #[test]
    fn test_switcher_glyphs() {
        let icons = SwitcherIcons::default();
        assert_eq!(icons.glyph(true), '▾');
        assert_eq!(icons.glyph(false), '▸');
    }
}
