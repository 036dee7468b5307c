//! Path resolution
//!
//! Resolves a value to its root-to-node chain, used to render breadcrumbs
//! ("Category A > Subcategory B > Leaf C") for single-select pickers.

use crate::domain::entities::{CategoryNode, CategoryTree};

/// Default breadcrumb separator
pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// Find the chain of nodes from a root down to the node carrying `target`.
///
/// Depth-first, pre-order: the first match wins when a value is duplicated.
/// Returns `None` when no node matches.
pub fn find_path<'a>(target: &str, roots: &'a [CategoryNode]) -> Option<Vec<&'a CategoryNode>> {
    let mut path = Vec::new();
    if descend(target, roots, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn descend<'a>(target: &str, nodes: &'a [CategoryNode], path: &mut Vec<&'a CategoryNode>) -> bool {
    for node in nodes {
        path.push(node);
        if node.value() == target || descend(target, node.children(), path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Render the names along `path` joined by `separator`
pub fn render_breadcrumb(path: &[&CategoryNode], separator: &str) -> String {
    path.iter()
        .map(|n| n.name())
        .collect::<Vec<_>>()
        .join(separator)
}

impl CategoryTree {
    pub fn find_path(&self, target: &str) -> Option<Vec<&CategoryNode>> {
        find_path(target, self.roots())
    }

    /// Breadcrumb for `target`, empty when the value is unknown
    pub fn breadcrumb(&self, target: &str, separator: &str) -> String {
        self.find_path(target)
            .map(|path| render_breadcrumb(&path, separator))
            .unwrap_or_default()
    }
}
