//! Plain-text rendering of the picker view

use std::fmt::Write;

use treepick_domain::hierarchy::{NodeIcon, TreeNode};
use treepick_domain::picker::{PickerView, TreeView};

pub fn render(view: &PickerView, selected: &[String]) -> String {
    match view {
        PickerView::Loading => "Loading...\n".to_string(),
        PickerView::Empty { message } => format!("{message}\n"),
        PickerView::Tree(tree) => {
            let mut out = String::new();
            for node in &tree.nodes {
                render_node(&mut out, tree, node, selected);
            }
            out
        }
    }
}

fn render_node(out: &mut String, tree: &TreeView, node: &TreeNode, selected: &[String]) {
    let guide = if tree.show_line { "│ " } else { "  " };
    let indent = guide.repeat(node.depth);
    let switcher = if node.is_leaf {
        ' '
    } else {
        tree.switcher.glyph(tree.default_expand_all)
    };
    let marker = match (tree.checkable, selected.contains(&node.key)) {
        (true, true) => "[x] ",
        (true, false) => "[ ] ",
        (false, true) => "(*) ",
        (false, false) => "",
    };
    let icon = match node.icon {
        NodeIcon::Domain => "◆",
        NodeIcon::SubDomain => "◇",
    };

    let _ = writeln!(out, "{indent}{switcher} {marker}{icon} {} ({})", node.label, node.key);

    if tree.default_expand_all {
        for child in &node.children {
            render_node(out, tree, child, selected);
        }
    }
}
